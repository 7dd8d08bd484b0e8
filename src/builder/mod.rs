mod encoder;

pub use encoder::{QrcodeEncoder, SymbolEncoder};

use image::Rgb;

use crate::common::metadata::ECLevel;
use crate::editor::Editor;
use crate::reader::{RqrrDecoder, SymbolDecoder};
use crate::render::Layout;

pub struct EditorBuilder {
    ec_level: ECLevel,
    layout: Layout,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self { ec_level: ECLevel::H, layout: Layout::default() }
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn module_size(&mut self, module_size: u32) -> &mut Self {
        debug_assert!(module_size > 0, "Module size must be positive");
        self.layout.module_size = module_size;
        self
    }

    pub fn border(&mut self, border: u32) -> &mut Self {
        self.layout.border = border;
        self
    }

    pub fn background(&mut self, background: Rgb<u8>) -> &mut Self {
        self.layout.background = background;
        self
    }

    pub fn layout(&mut self, layout: Layout) -> &mut Self {
        self.layout = layout;
        self
    }

    pub fn metadata(&self) -> String {
        let Layout { module_size, border, background: Rgb([r, g, b]) } = self.layout;
        format!(
            "{{ Ec level: {:?}, Module size: {module_size}, Border: {border}, Background: #{r:02X}{g:02X}{b:02X} }}",
            self.ec_level
        )
    }

    /// Editor over the `qrcode` encoder and `rqrr` decoder.
    pub fn build(&self) -> Editor<QrcodeEncoder, RqrrDecoder> {
        self.build_with(QrcodeEncoder, RqrrDecoder::default())
    }

    pub fn build_with<E: SymbolEncoder, D: SymbolDecoder>(
        &self,
        encoder: E,
        decoder: D,
    ) -> Editor<E, D> {
        Editor::new(encoder, decoder, self.ec_level, self.layout)
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod editor_builder_tests {
    use image::Rgb;

    use super::EditorBuilder;
    use crate::common::metadata::ECLevel;
    use crate::render::Layout;

    #[test]
    fn test_metadata() {
        let mut builder = EditorBuilder::new();
        assert_eq!(
            builder.metadata(),
            "{ Ec level: H, Module size: 10, Border: 4, Background: #FFFFFF }"
        );
        builder.ec_level(ECLevel::L).module_size(15).border(2).background(Rgb([255, 0, 128]));
        assert_eq!(
            builder.metadata(),
            "{ Ec level: L, Module size: 15, Border: 2, Background: #FF0080 }"
        );
    }

    #[test]
    fn test_build() {
        let mut builder = EditorBuilder::new();
        builder.ec_level(ECLevel::Q).layout(Layout { module_size: 3, ..Layout::default() });
        let editor = builder.build();
        assert_eq!(editor.ec_level(), ECLevel::Q);
        assert_eq!(editor.layout().module_size, 3);
        assert!(editor.canvas().is_none());
    }
}
