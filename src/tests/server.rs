use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use crate::Client;

/// Loopback HTTP server answering one connection per canned response.
pub struct MockServer {
    addr: SocketAddr,
    handle: JoinHandle<io::Result<Vec<Request>>>,
}

/// A request as seen by [`MockServer`].
pub struct Request {
    pub line: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl MockServer {
    pub fn serve(responses: Vec<(u16, &'static str)>) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        let handle = thread::spawn(move || -> io::Result<Vec<Request>> {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept()?;
                requests.push(read_request(&stream)?);
                let response = format!(
                    "HTTP/1.1 {status} {}\r\n\
                    Content-Type: application/json\r\n\
                    Content-Length: {}\r\n\
                    Connection: close\r\n\r\n{body}",
                    reason(status),
                    body.len(),
                );
                stream.write_all(response.as_bytes())?;
                stream.flush()?;
            }
            Ok(requests)
        });
        Ok(Self { addr, handle })
    }

    pub fn template(&self) -> String {
        format!(
            "http://{}/{{language}}/api/rest_v1/page/random/summary",
            self.addr
        )
    }

    pub fn client(&self) -> crate::Result<Client> {
        Client::builder().template(self.template()).build()
    }

    /// Requests received, in order. Waits for every response to be sent.
    pub fn requests(self) -> Vec<Request> {
        self.handle.join().unwrap().unwrap()
    }
}

fn read_request(stream: &TcpStream) -> io::Result<Request> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let mut headers = Vec::new();
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" {
            break;
        }
        if let Some((name, value)) = header.trim_end().split_once(':') {
            headers.push((name.to_owned(), value.trim().to_owned()));
        }
    }
    Ok(Request {
        line: line.trim_end().to_owned(),
        headers,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}
