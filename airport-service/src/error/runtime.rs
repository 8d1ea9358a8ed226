use displaydoc::Display;
use thiserror::Error;

use super::init::InitError;

#[derive(Debug, Error, Display)]
pub enum RuntimeError {
    /// Initialization error: {0}
    Init(#[from] InitError),
    /// Server error: {0}
    Serve(std::io::Error),
    /// Failed to install signal handler: {0}
    Signal(std::io::Error),
}
