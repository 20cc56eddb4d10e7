use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::process::{Child, Command};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

pub const BIN: &str = env!("CARGO_BIN_EXE_cheese-catalog");

pub fn free_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr")
}

pub fn base_cmd(data_dir: &TempDir) -> Command {
    let mut command = Command::new(BIN);
    command
        .env("DOTENV_PATH", data_dir.path().join("absent.env"))
        .env_remove("CATALOG_LISTEN")
        .env_remove("CATALOG_DATABASE")
        .env_remove("CATALOG_PUBLIC_DIR")
        .env_remove("CATALOG_LOG_FILE");
    command
}

/// Kills the service when the test ends, even on panic.
pub struct Service {
    pub addr: SocketAddr,
    child: Child,
}

impl Drop for Service {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn start_service(data_dir: &TempDir) -> Service {
    let addr = free_addr();
    let public_dir = data_dir.path().join("public");
    std::fs::create_dir_all(&public_dir).expect("create public dir");
    std::fs::write(public_dir.join("index.html"), "<div id=\"cheese-list\"></div>")
        .expect("write index.html");

    let child = base_cmd(data_dir)
        .arg("--listen")
        .arg(addr.to_string())
        .arg("--database")
        .arg(data_dir.path().join("catalog.sqlite"))
        .arg("--public-dir")
        .arg(&public_dir)
        .spawn()
        .expect("spawn cheese-catalog");

    let service = Service { addr, child };
    wait_until_listening(addr);
    service
}

fn wait_until_listening(addr: SocketAddr) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while Instant::now() < deadline {
        if TcpStream::connect(addr).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(100));
    }
    panic!("service did not start listening on {addr}");
}

/// Issues a plain HTTP/1.1 GET and returns (status line, body).
pub fn http_get(addr: SocketAddr, path: &str) -> (String, String) {
    let mut stream = TcpStream::connect(addr).expect("connect");
    write!(
        stream,
        "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n"
    )
    .expect("write request");

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).expect("read response");
    let text = String::from_utf8_lossy(&raw).into_owned();
    let (head, body) = text.split_once("\r\n\r\n").expect("header terminator");
    let status = head.lines().next().unwrap_or_default().to_string();
    (status, body.to_string())
}
