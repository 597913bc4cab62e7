#![no_main]

use std::num::NonZeroU8;
use std::path::Path;

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;
use rgb565_embed::arg_parsers::TargetSize;
use rgb565_embed::plan::{Config, ConversionPlan};

#[derive(Debug)]
struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgb_data: Vec<u8>,
}

impl StructuredImage {
    fn save_as_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        let img = image::RgbImage::from_raw(
            self.width.get() as u32,
            self.height.get() as u32,
            self.rgb_data.clone(),
        )
        .expect("buffer sized from the dimensions");
        img.save_with_format(path, image::ImageFormat::Png)
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgb_data_len = width.get() as usize * height.get() as usize * 3;
        let rgb_data = unstructured.bytes(rgb_data_len)?;

        Ok(Self {
            width,
            height,
            rgb_data: rgb_data.to_vec(),
        })
    }
}

fuzz_target!(|input: (StructuredImage, NonZeroU8, NonZeroU8)| {
    let (image, new_width, new_height) = input;
    let size = TargetSize::new(new_width.into(), new_height.into());

    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let config = Config {
        size,
        output: temp_directory.path().join("image.c"),
        ..Default::default()
    };
    let artifact = ConversionPlan::new(&input_path, config)
        .expect("default names are valid")
        .execute()
        .expect("a valid PNG must convert");

    // Contract.
    assert_eq!(artifact.pixel_count, size.pixel_count());
    assert_eq!(artifact.byte_len, 2 * size.pixel_count());

    let source = std::fs::read_to_string(temp_directory.path().join("image.c"))
        .expect("artifact must exist");
    assert_eq!(source.matches("0x").count(), artifact.byte_len);
    assert!(source.ends_with(&format!("unsigned int image_len = {};\n", artifact.byte_len)));
});
