use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write an 8-bit palette PNG with a tRNS chunk.
///
/// `palette` holds RGB triples, `trns` one alpha per leading palette entry,
/// `indices` one palette index per pixel in row-major order.
pub(crate) fn write_indexed_png(
    path: &Path,
    width: u32,
    height: u32,
    palette: &[u8],
    trns: &[u8],
    indices: &[u8],
) {
    let file = File::create(path).unwrap();
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.to_vec());
    encoder.set_trns(trns.to_vec());

    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(indices).unwrap();
    writer.finish().unwrap();
}
