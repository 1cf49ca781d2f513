//! Scoped banking session
//!
//! [`Session`] owns a [`BankingBackend`] for the duration of one invocation.
//! Opening it runs `init` and `online_init`; [`Session::close`] runs
//! `online_fini` and `fini` and reports failures. A session dropped without
//! `close` (an early error return) still tears the backend down and logs
//! anything that goes wrong.

use crate::core::traits::BankingBackend;
use crate::types::SyncError;

/// Exclusively owned, open banking session
#[derive(Debug)]
pub struct Session<B: BankingBackend> {
    backend: B,
    open: bool,
}

impl<B: BankingBackend> Session<B> {
    /// Initialize the backend and bring it online
    ///
    /// # Errors
    ///
    /// Returns `SyncError::SessionInit` with the failing stage and code. If
    /// `online_init` fails, the already initialized backend is released first.
    pub fn open(mut backend: B) -> Result<Self, SyncError> {
        backend
            .init()
            .map_err(|code| SyncError::SessionInit { stage: "init", code })?;

        if let Err(code) = backend.online_init() {
            if let Err(fini_code) = backend.fini() {
                tracing::warn!(code = fini_code, "deinit after failed onlineinit also failed");
            }
            return Err(SyncError::SessionInit {
                stage: "onlineinit",
                code,
            });
        }

        Ok(Session {
            backend,
            open: true,
        })
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Take the backend offline and release it
    ///
    /// Both steps always run; the first failure is reported.
    pub fn close(mut self) -> Result<(), SyncError> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<(), SyncError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        let online = self.backend.online_fini().map_err(|code| SyncError::SessionTeardown {
            stage: "online deinit",
            code,
        });
        let fini = self
            .backend
            .fini()
            .map_err(|code| SyncError::SessionTeardown {
                stage: "deinit",
                code,
            });
        online.and(fini)
    }
}

impl<B: BankingBackend> Drop for Session<B> {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            tracing::error!(error = %e, "banking session teardown failed");
        }
    }
}
