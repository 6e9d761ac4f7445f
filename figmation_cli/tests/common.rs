#![allow(dead_code)]

use std::io::Read;
use std::io::Write;
use std::net::TcpListener;
use std::thread::JoinHandle;

use assert_cmd::Command;

pub const LOCAL_VARIABLES_BODY: &str = r##"{
	"status": 200,
	"error": false,
	"meta": {
		"variableCollections": {
			"VariableCollectionId:1": {
				"id": "VariableCollectionId:1",
				"name": "Colors",
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
						"valuesByMode": { "1:0": "#FF0000", "1:1": "#990000" }
					},
					{
						"id": "VariableID:11",
						"name": "Spacing/Gap/Medium",
						"scopes": ["GAP"],
						"valuesByMode": { "1:0": 16, "1:1": 16 }
					},
					{
						"id": "VariableID:12",
						"name": "Colors/Secret",
						"scopes": ["ALL_FILLS"],
						"hiddenFromPublishing": true,
						"valuesByMode": { "1:0": "#123456" }
					}
				]
			}
		}
	}
}"##;

pub const LIGHT_CSS: &str = ":root {
  /* Colors */
  --color-primary: #FF0000;

  /* Spacing */
  --gap-gap-medium: 16px;
}";

pub const DARK_CSS: &str = ":root {
  /* Colors */
  --color-primary: #990000;

  /* Spacing */
  --gap-gap-medium: 16px;
}";

pub fn figmation_cmd() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_figmation"));
	cmd.env("NO_COLOR", "1");
	for key in [
		"FIGMA_ACCESS_TOKEN",
		"FIGMA_FILE_ID",
		"RUST_LOG",
		"HTTP_PROXY",
		"http_proxy",
		"HTTPS_PROXY",
		"https_proxy",
		"ALL_PROXY",
		"all_proxy",
	] {
		cmd.env_remove(key);
	}
	cmd
}

/// Answer `count` HTTP requests on a loopback port with the same response.
/// The handle resolves to the raw request texts.
pub fn serve(status_line: &str, body: &str, count: usize) -> (String, JoinHandle<Vec<String>>) {
	let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
	let address = listener.local_addr().expect("listener address");
	let response = format!(
		"HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: \
		 {}\r\nconnection: close\r\n\r\n{body}",
		body.len()
	);

	let handle = std::thread::spawn(move || {
		let mut requests = Vec::with_capacity(count);

		for _ in 0..count {
			let (mut stream, _) = listener.accept().expect("accept connection");
			let mut request = Vec::new();
			let mut buffer = [0_u8; 4096];

			loop {
				let read = stream.read(&mut buffer).expect("read request");
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
				.expect("write response");
			let _ = stream.flush();
			requests.push(String::from_utf8_lossy(&request).into_owned());
		}

		requests
	});

	(format!("http://{address}"), handle)
}
