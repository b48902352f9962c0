//! Transport certificate identity for tls_client_auth.

use x509_parser::pem::parse_x509_pem;

use crate::error::{AuthError, AuthResult};

/// The transport-layer identity presented during mTLS.
///
/// `tls_client_auth` registrations must carry the certificate's subject as
/// `tls_client_auth_subject_dn`. An explicit override wins over deriving
/// the DN from the certificate.
#[derive(Debug, Clone, Default)]
pub struct TransportIdentity {
    /// Explicit subject DN to register, if configured.
    pub subject_dn_override: Option<String>,

    /// PEM-encoded transport certificate.
    pub certificate_pem: Option<Vec<u8>>,
}

impl TransportIdentity {
    /// Resolves the subject DN to place in the registration claims.
    ///
    /// # Errors
    ///
    /// Returns `TransportCertNotAvailable` when neither an override nor a
    /// certificate is configured, or a parse error for a bad certificate.
    pub fn subject_dn(&self) -> AuthResult<String> {
        if let Some(dn) = &self.subject_dn_override {
            return Ok(dn.clone());
        }

        let pem = self
            .certificate_pem
            .as_ref()
            .ok_or(AuthError::TransportCertNotAvailable)?;

        let (_, parsed) =
            parse_x509_pem(pem).map_err(|e| AuthError::CertificateParse(e.to_string()))?;
        let certificate = parsed
            .parse_x509()
            .map_err(|e| AuthError::CertificateParse(e.to_string()))?;

        // X509Name renders RFC2253-style, e.g. "C=GB, O=Example Org".
        Ok(certificate.subject().to_string())
    }
}
