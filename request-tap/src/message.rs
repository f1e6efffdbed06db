use bytes::Bytes;
use head_tap::{header_map::HeaderMap, version::Version};

use crate::error::MessageError;

// One-way lifecycle gate. Locked is terminal for the session.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Lifecycle {
    #[default]
    Building,
    Locked,
}

// Readiness signal for the external body-reading collaborator.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BodyState {
    Available,
    NotReadYet,
}

// State shared by both message directions.
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
#[derive(Default)]
pub struct MessageCore {
    headers: HeaderMap,
    version: Version,
    body: Option<Bytes>,
    body_read: bool,
    lifecycle: Lifecycle,
}

impl MessageCore {
    pub fn new(headers: HeaderMap, version: Version) -> Self {
        MessageCore {
            headers,
            version,
            body: None,
            body_read: false,
            lifecycle: Lifecycle::Building,
        }
    }
}

pub trait Message {
    fn core(&self) -> &MessageCore;
    fn core_mut(&mut self) -> &mut MessageCore;

    // Direction-specific body-presence policy.
    fn has_body(&self) -> bool;

    // Current request line + headers, re-rendered on every call.
    fn header_text(&self) -> String;

    fn header_bytes(&self) -> Bytes {
        Bytes::from(self.header_text())
    }

    fn headers(&self) -> &HeaderMap {
        &self.core().headers
    }

    // Structural mutation is gated on the lifecycle.
    fn headers_mut(&mut self) -> Result<&mut HeaderMap, MessageError> {
        let core = self.core_mut();
        if core.lifecycle == Lifecycle::Locked {
            return Err(MessageError::Locked);
        }
        Ok(&mut core.headers)
    }

    fn version(&self) -> Version {
        self.core().version
    }

    // Transport may inject an out-of-band negotiated version before the
    // pipeline runs.
    fn set_version(&mut self, version: Version) -> Result<(), MessageError> {
        let core = self.core_mut();
        if core.lifecycle == Lifecycle::Locked {
            return Err(MessageError::Locked);
        }
        core.version = version;
        Ok(())
    }

    fn body(&self) -> Option<&Bytes> {
        self.core().body.as_ref()
    }

    fn is_body_read(&self) -> bool {
        self.core().body_read
    }

    fn locked(&self) -> bool {
        self.core().lifecycle == Lifecycle::Locked
    }

    fn lock(&mut self) {
        self.core_mut().lifecycle = Lifecycle::Locked;
    }

    // Stored by the body-reading collaborator once the bytes are in.
    fn store_body(&mut self, body: Bytes) -> Result<(), MessageError> {
        let core = self.core_mut();
        if core.lifecycle == Lifecycle::Locked {
            return Err(MessageError::Locked);
        }
        core.body = Some(body);
        core.body_read = true;
        Ok(())
    }

    // A read attempt that legitimately found no bytes still counts.
    fn mark_body_read(&mut self) -> Result<(), MessageError> {
        let core = self.core_mut();
        if core.lifecycle == Lifecycle::Locked {
            return Err(MessageError::Locked);
        }
        core.body_read = true;
        Ok(())
    }

    /* Readiness check only, performs no IO.
     *
     * Steps:
     *      1. No body per direction policy => BodyNotFound, buffered or
     *         not.
     *      2. Buffered body => Available.
     *      3. Not read yet: locked => Locked, strict => BodyNotRead,
     *         otherwise signal NotReadYet without failing.
     *      4. A read attempt was already made => Available.
     */
    fn ensure_body_available(&self, strict: bool) -> Result<BodyState, MessageError> {
        if !self.has_body() {
            return Err(MessageError::BodyNotFound);
        }
        let core = self.core();
        if core.body.is_some() {
            return Ok(BodyState::Available);
        }
        if !core.body_read {
            if core.lifecycle == Lifecycle::Locked {
                return Err(MessageError::Locked);
            }
            if strict {
                return Err(MessageError::BodyNotRead);
            }
            return Ok(BodyState::NotReadYet);
        }
        Ok(BodyState::Available)
    }
}
