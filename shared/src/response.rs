use std::convert::TryFrom;

use bytes::{BufMut, BytesMut};

use crate::{Error, Result, SignalResult};

/// The reply to a single signal: a result byte followed by a textual
/// rendering of the drive state. There is no length prefix or delimiter,
/// so a reply only has meaning as "the bytes that answered one signal".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub result: SignalResult,
    pub state: String,
}

impl Response {
    pub fn new<S: Into<String>>(result: SignalResult, state: S) -> Self {
        Response { result, state: state.into() }
    }

    pub fn encode(&self, destination: &mut BytesMut) {
        destination.reserve(1 + self.state.len());
        destination.put_u8(self.result.into());
        destination.put_slice(self.state.as_bytes());
    }

    pub fn parse(source: &[u8]) -> Result<Self> {
        let (&result, state) = source.split_first()
            .ok_or(Error::EmptyResponse)?;
        Ok(Response {
            result: SignalResult::try_from(result)?,
            state: std::str::from_utf8(state)?.to_owned(),
        })
    }
}
