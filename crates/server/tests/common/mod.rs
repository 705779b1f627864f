//! # Common Test Utilities
//!
//! `TestApp` spawns the real server on a random port, with `httpmock`
//! standing in for the chat-completions endpoint, so the tests exercise the
//! full HTTP surface including the provider's wire format.

#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use printpdf::{
    BuiltinFont, Layer, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem, TextMatrix,
    TextRenderingMode,
};
use reqwest::Client;
use studykit_server::{config::AppConfig, run};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
}

impl TestApp {
    /// Spawns the application server against a mocked completion endpoint.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config = AppConfig {
            port: 0,
            ai_api_url: Some(mock_server.url("/v1/chat/completions")),
            ai_api_key: None,
            ai_model: "mock-chat-model".to_string(),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            if let Err(e) = run(listener, config).await {
                eprintln!("Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
        })
    }
}

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
