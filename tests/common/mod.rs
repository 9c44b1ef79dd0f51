//! Stub backends for the metadata, build and relay endpoints.
//!
//! One axum server answers all three services so a single base URL can be
//! used for every endpoint. Each route counts its calls and keeps the last
//! request body it saw.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::routing::post;
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use solana_portal::client::PortalClient;
use solana_pubkey::Pubkey;
use solana_system_interface::instruction as system_instruction;
use solana_transaction::versioned::VersionedTransaction;
use solana_transaction::Transaction;
use tokio::net::TcpListener;

pub const UPLOAD_OK: &str = r#"{
    "metadataUri": "https://ipfs.io/ipfs/QmStubMetadata",
    "metadata": {
        "name": "Stub Cat",
        "symbol": "STUB",
        "description": "meow",
        "image": "https://ipfs.io/ipfs/QmStubImage",
        "showName": true
    }
}"#;

/// How the relay route answers.
pub enum RelayMode {
    /// Accept and return the first signature of the submitted transaction.
    Echo,
    /// Return a fixed status and body.
    Fixed(u16, String),
}

/// Canned behaviour for each route. `None` means "behave like the real service".
pub struct Stub {
    pub upload: Option<(u16, String)>,
    pub build: Option<(u16, String)>,
    pub relay: RelayMode,
}

impl Default for Stub {
    fn default() -> Self {
        Self {
            upload: None,
            build: None,
            relay: RelayMode::Echo,
        }
    }
}

#[derive(Default)]
pub struct Recorded {
    pub uploads: AtomicUsize,
    pub builds: AtomicUsize,
    pub relays: AtomicUsize,
    pub upload_body: Mutex<Option<String>>,
    pub upload_content_type: Mutex<Option<String>>,
    pub build_path: Mutex<Option<String>>,
    pub build_body: Mutex<Option<serde_json::Value>>,
    pub relay_body: Mutex<Option<serde_json::Value>>,
}

impl Recorded {
    /// (uploads, builds, relays)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.uploads.load(Ordering::SeqCst),
            self.builds.load(Ordering::SeqCst),
            self.relays.load(Ordering::SeqCst),
        )
    }
}

struct Shared {
    stub: Stub,
    recorded: Arc<Recorded>,
}

pub struct StubServer {
    pub addr: SocketAddr,
    pub recorded: Arc<Recorded>,
}

impl StubServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client with every endpoint pointed at this stub.
    pub fn client(&self) -> PortalClient {
        PortalClient::builder()
            .metadata_url(&self.url())
            .api_url(&self.url())
            .relay_url(&self.url())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }
}

impl Stub {
    pub async fn spawn(self) -> StubServer {
        let recorded = Arc::new(Recorded::default());
        let shared = Arc::new(Shared {
            stub: self,
            recorded: recorded.clone(),
        });

        let app = Router::new()
            .route("/api/ipfs", post(upload))
            .route("/api/create/token/{platform}", post(build))
            .route("/api/trading", post(build))
            .route("/api/v1/transactions", post(relay))
            .with_state(shared);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        StubServer { addr, recorded }
    }
}

/// Unsigned transfer whose only required signer is `payer`, as base64.
pub fn unsigned_transaction_for(payer: &Pubkey) -> String {
    let ix = system_instruction::transfer(payer, &Pubkey::new_unique(), 1_000);
    let tx = VersionedTransaction::from(Transaction::new_with_payer(&[ix], Some(payer)));
    BASE64_STANDARD.encode(bincode::serialize(&tx).unwrap())
}

/// Decode the base58 transaction carried in a relay envelope.
pub fn relayed_transaction(envelope: &serde_json::Value) -> VersionedTransaction {
    let encoded = envelope["params"][0].as_str().unwrap();
    let bytes = bs58::decode(encoded).into_vec().unwrap();
    bincode::deserialize(&bytes).unwrap()
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

async fn upload(
    State(shared): State<Arc<Shared>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let rec = &shared.recorded;
    rec.uploads.fetch_add(1, Ordering::SeqCst);
    *rec.upload_body.lock().unwrap() = Some(String::from_utf8_lossy(&body).into_owned());
    *rec.upload_content_type.lock().unwrap() = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match &shared.stub.upload {
        Some((code, body)) => (status(*code), body.clone()),
        None => (StatusCode::OK, UPLOAD_OK.to_string()),
    }
}

async fn build(State(shared): State<Arc<Shared>>, uri: Uri, body: Bytes) -> (StatusCode, String) {
    let rec = &shared.recorded;
    rec.builds.fetch_add(1, Ordering::SeqCst);
    *rec.build_path.lock().unwrap() = Some(uri.path().to_string());
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    *rec.build_body.lock().unwrap() = Some(json.clone());

    match &shared.stub.build {
        Some((code, body)) => (status(*code), body.clone()),
        None => {
            let payer = Pubkey::from_str(json["wallet_address"].as_str().unwrap()).unwrap();
            (StatusCode::OK, unsigned_transaction_for(&payer))
        }
    }
}

async fn relay(State(shared): State<Arc<Shared>>, body: Bytes) -> (StatusCode, String) {
    let rec = &shared.recorded;
    rec.relays.fetch_add(1, Ordering::SeqCst);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    *rec.relay_body.lock().unwrap() = Some(json.clone());

    match &shared.stub.relay {
        RelayMode::Echo => {
            let tx = relayed_transaction(&json);
            let reply = serde_json::json!({
                "jsonrpc": "2.0",
                "result": tx.signatures[0].to_string(),
                "id": json["id"],
            });
            (StatusCode::OK, reply.to_string())
        }
        RelayMode::Fixed(code, body) => (status(*code), body.clone()),
    }
}
