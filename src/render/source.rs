use std::io::{self, BufRead};

/// Splits a reader into lines without rejecting any byte sequence.
///
/// Lines end at `\n`; a trailing `\r` is dropped. Invalid UTF-8 is replaced
/// with U+FFFD so that rendering stays total over arbitrary input.
#[derive(Debug)]
pub struct LossyLines<R> {
	reader: R,
	buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			buf: Vec::new(),
		}
	}
}

impl<R: BufRead> Iterator for LossyLines<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		self.buf.clear();
		match self.reader.read_until(b'\n', &mut self.buf) {
			Ok(0) => None,
			Ok(_) => {
				if self.buf.last() == Some(&b'\n') {
					self.buf.pop();
				}
				if self.buf.last() == Some(&b'\r') {
					self.buf.pop();
				}
				Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
			}
			Err(err) => Some(Err(err)),
		}
	}
}
