//! Write `swatches.html` showing the palettes of the crate.

use std::{fs::File,
          io::{BufWriter, Write},
          error::Error};
use rgb::RGB8;
use urban_graphics::{RGBColor, ColorRange, Colormap, CMAP, DIVERGING,
                     get_colormap, named_legend};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.to_gray().to_hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn colormap(fh: &mut impl Write, cmap: &Colormap, comment: &str)
            -> Result<(), Err> {
    let colors: Vec<RGB8> = cmap.range(0., 1., cmap.len())
        .map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, 40, comment)
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>urban-graphics swatches</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Base colors</h3>")?;
    colormap(&mut fh, &CMAP, "")?;

    writeln!(fh, "<h3>Expanded colormaps</h3>")?;
    for n in [6, 12, 18, 24] {
        colormap(&mut fh, &get_colormap(n, false),
                 &format!("{n} colors, generation order"))?;
    }
    colormap(&mut fh, &get_colormap(18, true), "18 colors, shuffled")?;

    writeln!(fh, "<h3>Diverging</h3>")?;
    let div: Vec<RGB8> = DIVERGING.iter().map(|&c| RGB8::from_rgba(c))
        .collect();
    table_of_colors(&mut fh, &div, 40, "")?;

    writeln!(fh, "<h3>Signatures</h3>")?;
    for (name, c) in named_legend(true) {
        table_of_colors(&mut fh, &[RGB8::from_rgba(c)], 40, &name)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
