//! Shared fixture generation for the extraction tests.

#![allow(unused)]

use anyhow::Result;
use printpdf::{
    BuiltinFont, Layer, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem, TextMatrix,
    TextRenderingMode,
};

/// Generates a single-page PDF containing the given text.
///
/// Uses the built-in Helvetica font so the text is stored with the standard
/// WinAnsi encoding; embedding a subset font would store glyph indices that
/// the extractor under test cannot decode back into the original string.
pub fn generate_test_pdf(text: &str) -> Result<Vec<u8>> {
    let mut doc = PdfDocument::new("studykit fixture");
    let mut page = PdfPage::new(Mm(210.0), Mm(297.0), vec![]);
    let layer_id = doc.add_layer(&Layer::new("text"));

    page.ops = vec![
        Op::BeginLayer {
            layer_id: layer_id.clone(),
        },
        Op::StartTextSection,
        Op::SetFontSizeBuiltinFont {
            size: Pt(12.0),
            font: BuiltinFont::Helvetica,
        },
        Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Mm(10.0).into(), Mm(280.0).into()),
        },
        Op::SetTextRenderingMode {
            mode: TextRenderingMode::Fill,
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        },
        Op::EndTextSection,
        Op::EndLayer { layer_id },
    ];
    doc.pages.push(page);

    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}
