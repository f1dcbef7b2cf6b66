//! Static file server for the swap widget bundle
//!
//! Serves the trunk `dist/` output with an index.html fallback for
//! client-side routes.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST: &str = "dist";

fn main() {
    let listener = TcpListener::bind(ADDR).expect("failed to bind dev server port");

    println!("SwapDeck dev server running at http://{ADDR}");
    println!("Serving from {DIST}/");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(err) => eprintln!("Connection error: {err}"),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => return,
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split('?').next().unwrap_or("/");

    let file_path = resolve(path);
    let (status, body) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", body),
        Err(_) => (
            "404 NOT FOUND",
            b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
        ),
    };
    let mime = if status.starts_with("404") {
        "text/html; charset=utf-8"
    } else {
        content_type(&file_path)
    };

    let headers = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {mime}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        body.len()
    );

    if let Err(err) = stream
        .write_all(headers.as_bytes())
        .and_then(|_| stream.write_all(&body))
        .and_then(|_| stream.flush())
    {
        eprintln!("Failed to write response: {err}");
    }
}

/// Map a request path into `dist/`; directories and unknown paths fall back
/// to index.html so client-side routes resolve.
fn resolve(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return Path::new(DIST).join("index.html");
    }
    let candidate = Path::new(DIST).join(path.trim_start_matches('/'));
    if candidate.is_file() {
        candidate
    } else {
        Path::new(DIST).join("index.html")
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
