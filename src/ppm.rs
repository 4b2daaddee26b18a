use crate::image::{Image, Pixel};
use thiserror::Error;

/// Magic token opening a plain (ASCII) PPM stream.
const MAGIC: &str = "P3";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PpmError {
    #[error("invalid image format (must be '{MAGIC}')")]
    BadMagic,

    #[error("invalid image size")]
    BadSize,

    #[error("invalid rgb component")]
    BadDepth,

    #[error("invalid channel value '{0}'")]
    BadChannel(String),

    #[error("incomplete pixel triplet at end of stream")]
    PartialTriplet,

    #[error("pixel count mismatch: header declares {expected} pixels, stream holds {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

pub trait ImageCodec {
    fn encode(&self, image: &Image) -> String;
    fn decode(&self, value: &str) -> Result<Image, PpmError>;
}

/// Codec for the plain pixel-triplet format.
///
/// Triplets are stored blue-green-red on disk. The default configuration
/// mirrors the historical reader: pixel data is consumed until the stream
/// ends, without checking the triplet count against the declared size.
/// [`strict_pixel_count`] turns that check on and makes a mismatch a
/// dedicated error.
///
/// [`strict_pixel_count`]: #method.strict_pixel_count
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPpm {
    strict_pixel_count: bool,
}

impl PlainPpm {
    pub fn strict_pixel_count(mut self, strict: bool) -> Self {
        self.strict_pixel_count = strict;
        self
    }
}

impl ImageCodec for PlainPpm {
    fn encode(&self, image: &Image) -> String {
        let width = image.width();
        let mut out = String::new();
        out.push_str(MAGIC);
        out.push('\n');
        out.push_str(&format!("{} {}\n", width, image.height()));
        // output holds life states, so the declared depth is always 1
        out.push_str("1\n");
        for (index, pixel) in image.cells().iter().enumerate() {
            out.push_str(&format!("{} {} {}  ", pixel.blue, pixel.green, pixel.red));
            if (index + 1) % width == 0 {
                out.push('\n');
            }
        }
        out
    }

    fn decode(&self, value: &str) -> Result<Image, PpmError> {
        let mut scanner = Scanner::new(value);
        if !scanner.starts_with(MAGIC) {
            return Err(PpmError::BadMagic);
        }
        scanner.skip_line();
        scanner.skip_comments();

        let width = dimension(&mut scanner)?;
        let height = dimension(&mut scanner)?;

        // the component depth is read but historically never validated,
        // only a token that fails to parse at all is fatal
        scanner
            .token()
            .and_then(|tok| tok.parse::<i32>().ok())
            .ok_or(PpmError::BadDepth)?;
        scanner.skip_line();

        let mut cells = Vec::with_capacity(width * height);
        while let Some(blue) = channel(&mut scanner)? {
            let green = channel(&mut scanner)?.ok_or(PpmError::PartialTriplet)?;
            let red = channel(&mut scanner)?.ok_or(PpmError::PartialTriplet)?;
            cells.push(Pixel { red, green, blue });
        }

        let expected = width * height;
        if self.strict_pixel_count && cells.len() != expected {
            return Err(PpmError::PixelCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Image::from_cells(width, height, cells))
    }
}

fn dimension(scanner: &mut Scanner<'_>) -> Result<usize, PpmError> {
    scanner
        .token()
        .and_then(|tok| tok.parse::<usize>().ok())
        .filter(|&dim| dim > 0)
        .ok_or(PpmError::BadSize)
}

fn channel(scanner: &mut Scanner<'_>) -> Result<Option<i32>, PpmError> {
    match scanner.token() {
        None => Ok(None),
        Some(tok) => tok
            .parse()
            .map(Some)
            .map_err(|_| PpmError::BadChannel(tok.to_owned())),
    }
}

/// Whitespace-token cursor over the raw stream text.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(rest: &'a str) -> Self {
        Self { rest }
    }

    #[inline]
    fn starts_with(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Discards everything up to and including the next line terminator.
    fn skip_line(&mut self) {
        self.rest = match self.rest.find('\n') {
            Some(i) => &self.rest[i + 1..],
            None => "",
        };
    }

    /// Discards lines whose first non-whitespace character is `#`.
    fn skip_comments(&mut self) {
        loop {
            let trimmed = self.rest.trim_start();
            if trimmed.starts_with('#') {
                self.rest = trimmed;
                self.skip_line();
            } else {
                break;
            }
        }
    }

    /// The next whitespace-delimited token, or [`None`] at end of input.
    fn token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (tok, rest) = trimmed.split_at(end);
        self.rest = rest;
        Some(tok)
    }
}
