use pokecard_catalog::error::Kind;
use pokecard_catalog::pokemon::Id;
use pokecard_catalog::{Endpoint, Error, Session, Source};

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// Answers a single request with an empty response of the given status.
///
/// Returns the API base URL to point a session at, and a handle yielding the
/// request line that was received.
fn serve(status: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request = String::new();
        let _ = reader.read_line(&mut request).unwrap();

        loop {
            let mut header = String::new();
            let read = reader.read_line(&mut header).unwrap();

            if read == 0 || header == "\r\n" {
                break;
            }
        }

        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        )
        .unwrap();

        request.trim_end().to_owned()
    });

    (format!("http://{address}/api/v2"), server)
}

fn status(error: &Error) -> Option<StatusCode> {
    match error {
        Error::RequestFailed(error) => error.status(),
        _ => None,
    }
}

#[tokio::test]
async fn missing_creatures_are_transport_errors() {
    let (base_url, server) = serve("404 Not Found");
    let session = Session::new(base_url);

    let error = session.fetch_creature(Id::new(1)).await.unwrap_err();

    assert_eq!(error.kind(), Kind::Transport);
    assert_eq!(status(&error), Some(StatusCode::NOT_FOUND));
    assert_eq!(server.join().unwrap(), "GET /api/v2/pokemon/1 HTTP/1.1");
}

#[tokio::test]
async fn failing_move_lookups_are_transport_errors() {
    let (base_url, server) = serve("500 Internal Server Error");
    let session = Session::new(format!("{base_url}/"));

    let endpoint = Endpoint::from_url(&format!("{base_url}/move/13/"), session.base_url()).unwrap();
    let error = session.fetch_move(&endpoint).await.unwrap_err();

    assert_eq!(error.kind(), Kind::Transport);
    assert_eq!(status(&error), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(server.join().unwrap(), "GET /api/v2/move/13/ HTTP/1.1");
}

#[tokio::test]
async fn failing_downloads_are_transport_errors() {
    let (base_url, server) = serve("404 Not Found");
    let session = Session::new(base_url.clone());

    let error = session
        .download(&format!("{base_url}/sprites/1.png"))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), Kind::Transport);
    assert_eq!(server.join().unwrap(), "GET /api/v2/sprites/1.png HTTP/1.1");
}
