//! # Lectura de Requests desde el Socket
//! src/server/reader.rs
//!
//! Un request puede llegar en varios segmentos TCP. En vez de confiar en
//! un único `read`, se lee hasta ver el `\r\n\r\n` que cierra la cabecera y
//! después hasta completar `Content-Length` bytes de body.

use crate::http::request::{find_subslice, HEAD_TERMINATOR};
use std::io::{self, Read};

const CHUNK_SIZE: usize = 1024;

/// Lee un request completo de `reader`
///
/// Termina cuando:
/// - la cabecera está completa y llegaron `Content-Length` bytes de body
///   (o la cabecera no declara `Content-Length`),
/// - el peer cierra su lado (EOF), o
/// - se acumularon `limit` bytes; el buffer se trunca a `limit`.
///
/// Un buffer vacío significa que el peer cerró sin enviar nada.
pub fn read_request<R: Read>(reader: &mut R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(CHUNK_SIZE.min(limit));
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut expected_len: Option<usize> = None;

    while buffer.len() < limit {
        let n = match reader.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        buffer.extend_from_slice(&chunk[..n]);

        if expected_len.is_none() {
            expected_len = find_subslice(&buffer, HEAD_TERMINATOR).map(|pos| {
                let head_len = pos + HEAD_TERMINATOR.len();
                head_len.saturating_add(declared_content_length(&buffer[..pos]))
            });
        }

        if matches!(expected_len, Some(total) if buffer.len() >= total) {
            break;
        }
    }

    buffer.truncate(limit);
    Ok(buffer)
}

/// `Content-Length` declarado en la cabecera, 0 si falta o es inválido
fn declared_content_length(head: &[u8]) -> usize {
    String::from_utf8_lossy(head)
        .split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(": "))
        .filter(|(name, _)| *name == "Content-Length")
        .last()
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(0)
}
