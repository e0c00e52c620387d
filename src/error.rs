//! Error types for URL parsing and TLS registration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for this crate's operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for URL parsing, TLS registration, and connection opening.
#[derive(Debug, Error)]
pub enum Error {
    /// The connection string could not be parsed.
    #[error("invalid connection URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL scheme does not map to a known database driver.
    #[error("unknown database scheme {0:?}")]
    UnknownScheme(String),

    /// A referenced certificate or key file could not be read.
    #[error("certificate file {}: {source}", path.display())]
    CertFile {
        /// The path that failed.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// Certificate parameters were supplied for a driver without named
    /// TLS-config support.
    #[error("TLS certificate parameters are only supported for mysql, not {0:?}")]
    UnsupportedDriver(String),

    /// Both `tls` and a certificate parameter were supplied.
    #[error("tls cannot be combined with sslCa, sslCert, or sslKey")]
    ConflictingTlsParams,

    /// Exactly one of `sslCert`/`sslKey` was supplied.
    #[error("sslCert and sslKey must both be set or both be unset")]
    IncompleteKeypair,

    /// TLS registration was requested on a URL without an `sslCa` path.
    #[error("URL carries no sslCa path to register")]
    MissingCa,

    /// The CA file did not yield at least one usable certificate.
    #[error("invalid CA certificate {}: {reason}", path.display())]
    InvalidCaCert {
        /// The CA file path.
        path: PathBuf,
        /// Why the PEM was rejected.
        reason: String,
    },

    /// The client certificate/key pair could not be parsed.
    #[error("invalid client keypair {}: {reason}", cert.display())]
    InvalidKeypair {
        /// The client certificate path.
        cert: PathBuf,
        /// The client key path.
        key: PathBuf,
        /// Why the pair was rejected.
        reason: String,
    },

    /// The registration name is a reserved dial-time keyword.
    #[error("TLS config name {0:?} is reserved")]
    ReservedName(String),

    /// A `tls=<name>` parameter referenced a name nothing has registered.
    #[error("no TLS config registered under {0:?}")]
    UnknownTlsConfig(String),

    /// The URL parsed cleanly but no connector exists for its driver.
    #[error("no driver available to open {0:?} connections")]
    NoDriver(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cert_file_display_includes_path() {
        let err = Error::CertFile {
            path: PathBuf::from("/etc/certs/root-ca.pem"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("/etc/certs/root-ca.pem"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_unsupported_driver_names_driver() {
        let err = Error::UnsupportedDriver("postgres".to_string());
        assert!(err.to_string().contains("postgres"));
    }

    #[test]
    fn test_cert_file_exposes_source() {
        use std::error::Error as _;
        let err = Error::CertFile {
            path: PathBuf::from("ca.pem"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }
}
