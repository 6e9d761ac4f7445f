use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;

use tokio::io::AsyncReadExt;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::FigmationResult;
use crate::RawCollection;
use crate::sink::StylesheetSink;
use crate::source::VariableSource;

/// The body of a `GET /files/:key/variables/local` response with two
/// collections.
pub(crate) const LOCAL_VARIABLES_BODY: &str = r##"{
	"status": 200,
	"error": false,
	"meta": {
		"variableCollections": {
			"VariableCollectionId:2": {
				"id": "VariableCollectionId:2",
				"name": "Typography",
				"key": "typography",
				"defaultModeId": "2:0",
				"modes": [{ "modeId": "2:0", "name": "Light" }],
				"variables": [
					{
						"id": "VariableID:20",
						"name": "Typography/Size/Large",
						"resolvedType": "FLOAT",
						"scopes": ["FONT_SIZE"],
						"hiddenFromPublishing": false,
						"valuesByMode": { "2:0": 24 }
					},
					{
						"id": "VariableID:21",
						"name": "Typography/Family",
						"scopes": ["FONT_FAMILY"],
						"valuesByMode": { "2:0": "Inter" }
					},
					{
						"id": "VariableID:22",
						"name": "Layout/Border Radius/Small",
						"scopes": ["CORNER_RADIUS"],
						"valuesByMode": { "2:0": 4 }
					},
					{
						"id": "VariableID:23",
						"name": "Effects/Alias",
						"scopes": ["EFFECT_FLOAT"],
						"valuesByMode": { "2:0": { "type": "VARIABLE_ALIAS", "id": "VariableID:20" } }
					}
				]
			},
			"VariableCollectionId:1": {
				"id": "VariableCollectionId:1",
				"name": "Colors",
				"key": "colors",
				"defaultModeId": "1:0",
				"modes": [
					{ "modeId": "1:0", "name": "Light" },
					{ "modeId": "1:1", "name": "Dark" }
				],
				"variables": [
					{
						"id": "VariableID:10",
						"name": "Colors/Primary",
						"scopes": ["ALL_FILLS"],
						"hiddenFromPublishing": false,
						"valuesByMode": { "1:0": "#FF0000", "1:1": "#990000" }
					},
					{
						"id": "VariableID:11",
						"name": "Colors/Brand",
						"scopes": ["SPACING", "FRAME_FILL"],
						"valuesByMode": { "1:0": { "r": 0, "g": 0.5, "b": 1, "a": 1 } }
					},
					{
						"id": "VariableID:12",
						"name": "Colors/Secret",
						"scopes": ["ALL_FILLS"],
						"hiddenFromPublishing": true,
						"valuesByMode": { "1:0": "#123456", "1:1": "#654321" }
					}
				]
			}
		}
	}
}"##;

/// The stylesheet expected from [`LOCAL_VARIABLES_BODY`] in the default mode.
pub(crate) const LOCAL_VARIABLES_CSS: &str = ":root {
  /* Colors */
  --color-primary: #FF0000;
  --color-brand: #0080ff;

  /* Effects */

  /* Layout */
  --border-radius-border-radius-small: 4px;

  /* Typography */
  --font-size-large: 24px;
  --font-family-family: Inter;
}";

pub(crate) fn local_collections() -> BTreeMap<String, RawCollection> {
	let value: serde_json::Value =
		serde_json::from_str(LOCAL_VARIABLES_BODY).expect("fixture is valid json");
	serde_json::from_value(value["meta"]["variableCollections"].clone())
		.expect("fixture collections deserialize")
}

/// An in-memory source returning a fixed set of collections.
pub(crate) struct StaticSource(pub BTreeMap<String, RawCollection>);

impl VariableSource for StaticSource {
	async fn fetch_local_variables(&self) -> FigmationResult<BTreeMap<String, RawCollection>> {
		Ok(self.0.clone())
	}
}

/// A sink that records every write instead of touching the filesystem.
#[derive(Default)]
pub(crate) struct RecordingSink {
	pub writes: Mutex<Vec<(PathBuf, String)>>,
}

impl RecordingSink {
	pub fn writes(&self) -> Vec<(PathBuf, String)> {
		self.writes.lock().expect("sink lock").clone()
	}
}

impl StylesheetSink for RecordingSink {
	async fn write(&self, path: &Path, contents: &str) -> FigmationResult<()> {
		self.writes
			.lock()
			.expect("sink lock")
			.push((path.to_path_buf(), contents.to_string()));
		Ok(())
	}
}

/// Serve a single HTTP response on a loopback port. Resolves to the raw
/// request text once the response is sent.
pub(crate) async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
	let listener = TcpListener::bind("127.0.0.1:0")
		.await
		.expect("bind loopback listener");
	let address = listener.local_addr().expect("listener address");
	let response = format!(
		"HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: \
		 {}\r\nconnection: close\r\n\r\n{body}",
		body.len()
	);

	let handle = tokio::spawn(async move {
		let (mut stream, _) = listener.accept().await.expect("accept connection");
		let mut request = Vec::new();
		let mut buffer = [0_u8; 4096];

		loop {
			let read = stream.read(&mut buffer).await.expect("read request");
			if read == 0 {
				break;
			}
			request.extend_from_slice(&buffer[..read]);
			if request.windows(4).any(|window| window == b"\r\n\r\n") {
				break;
			}
		}

		stream
			.write_all(response.as_bytes())
			.await
			.expect("write response");
		let _ = stream.shutdown().await;

		String::from_utf8_lossy(&request).into_owned()
	});

	(format!("http://{address}"), handle)
}

/// A reqwest client that never routes loopback requests through a proxy.
pub(crate) fn direct_http_client() -> reqwest::Client {
	reqwest::Client::builder()
		.no_proxy()
		.build()
		.expect("build http client")
}
