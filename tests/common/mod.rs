//! Utilitários compartilhados pelos testes de integração.
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use concursos::remote::RemoteClient;
use concursos::{DrawRecord, DrawRequest, FetchError};

pub fn sample_draw(id: &str) -> DrawRecord {
    DrawRecord::new(id, "01/01/2024", ["4", "8", "15", "16", "23", "42"])
}

/// API falsa que conta chamadas e responde sempre o mesmo resultado.
pub struct MockRemote {
    response: Result<DrawRecord, FetchError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<DrawRequest>>,
}

impl MockRemote {
    pub fn returning(record: DrawRecord) -> Arc<Self> {
        Arc::new(Self::new(Ok(record), None))
    }

    pub fn failing(error: FetchError) -> Arc<Self> {
        Arc::new(Self::new(Err(error), None))
    }

    /// Responde só depois do atraso, para forçar corridas entre requisições.
    pub fn slow(record: DrawRecord, delay: Duration) -> Arc<Self> {
        Arc::new(Self::new(Ok(record), Some(delay)))
    }

    fn new(response: Result<DrawRecord, FetchError>, delay: Option<Duration>) -> Self {
        Self {
            response,
            delay,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<DrawRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteClient for MockRemote {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, request: &DrawRequest) -> Result<DrawRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

/// Resposta enlatada do servidor HTTP falso.
#[derive(Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// Servidor HTTP local que responde por caminho e registra os pedidos.
pub struct FakeApi {
    pub base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    /// Sobe o servidor numa thread; caminhos desconhecidos recebem 404.
    pub fn start(routes: &[(&str, CannedResponse)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fake API");
        let addr = listener.local_addr().unwrap();
        let routes: HashMap<String, CannedResponse> = routes
            .iter()
            .map(|(path, response)| (path.to_string(), response.clone()))
            .collect();
        let paths = Arc::new(Mutex::new(Vec::new()));
        let seen = paths.clone();

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Descarta os cabeçalhos
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => break,
                        Ok(_) if line == "\r\n" || line == "\n" => break,
                        Ok(_) => {}
                        Err(_) => break,
                    }
                }

                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();
                seen.lock().unwrap().push(path.clone());

                let response = routes
                    .get(&path)
                    .cloned()
                    .unwrap_or_else(|| CannedResponse::json(404, r#"{"error": "not found"}"#));

                let raw = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    if response.status < 400 { "OK" } else { "Error" },
                    response.body.len(),
                    response.body
                );
                let _ = stream.write_all(raw.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            base_url: format!("http://{}/api/megasena", addr),
            paths,
        }
    }

    /// Caminhos recebidos até agora.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

/// URL de um endereço local sem servidor escutando.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/megasena", addr)
}
