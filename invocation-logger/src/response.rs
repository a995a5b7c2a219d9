use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

/// The only message the function ever returns.
pub const SUCCESS_MESSAGE: &str = "Event and context logged successfully!";

/// An API Gateway compatible response. The runtime serializes it as `{"statusCode": .., "body": ".."}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Serialized JSON, not a nested object
    pub body: String,
}

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

impl Response {
    /// 200 with `{"message": "Event and context logged successfully!"}` as the body.
    pub fn success() -> serde_json::Result<Self> {
        Ok(Self {
            status_code: 200,
            body: to_spaced_json(&MessageBody {
                message: SUCCESS_MESSAGE,
            })?,
        })
    }
}

/// Compact JSON with a space after `:` and `,`, e.g. `{"a": 1, "b": 2}`.
/// Callers of the function compare the body as a string, so the separators are part of the contract.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Renders a value with `SpacedFormatter`.
fn to_spaced_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
