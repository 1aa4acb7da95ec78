//! Test fixtures: run the server binary on a fixed port.

use std::{
    net::TcpStream,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

const STARTUP_TIMEOUT: Duration = Duration::from_secs(10);

/// A server process killed when dropped
pub struct TestServer {
    process: Child,
    port: u16,
}

impl TestServer {
    /// Spawn the server and wait until it accepts connections.
    pub fn start(port: u16) -> Self {
        let process = Command::new(env!("CARGO_BIN_EXE_auracast-server"))
            .args(["--host", "127.0.0.1", "--port", &port.to_string()])
            .env("LOG_LEVEL", "warn")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start server");

        let server = Self { process, port };
        server.wait_until_ready();
        server
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    fn wait_until_ready(&self) {
        let deadline = Instant::now() + STARTUP_TIMEOUT;
        while Instant::now() < deadline {
            if TcpStream::connect(("127.0.0.1", self.port)).is_ok() {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("Server did not start on port {}", self.port);
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.process.kill();
        let _ = self.process.wait();
    }
}
