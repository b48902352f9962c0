//! Orchestration of a conformance run.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use dcr_auth::{Authoriser, AuthoriserConfig, SigningKey, TransportIdentity};
use dcr_core::suites::{dcr32, dcr33, SuiteConfig};
use dcr_core::Manifest;
use dcr_http::{build_client, HttpClientConfig, HttpDispatcher};
use dcr_oidc::fetch_openid_configuration;
use dcr_schema::SpecVersion;

use crate::cli::RunArgs;
use crate::config::SuiteSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use crate::report;

/// Runs the conformance suite and returns the process exit code.
///
/// # Errors
///
/// Fails on unusable configuration, discovery failure, or when nothing
/// matches the filter. A failing conformance run is not an error; it is
/// reported through the exit code.
pub fn run(args: &RunArgs, verbose: bool) -> CliResult<i32> {
    let settings = SuiteSettings::load(&args.config)?;
    let spec_version = match args.spec_version.as_deref() {
        Some(value) => value
            .parse::<SpecVersion>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => settings.spec_version,
    };
    let algorithm = Algorithm::from_str(&settings.signing_algorithm).map_err(|_| {
        CliError::Config(format!(
            "unsupported signing algorithm `{}`",
            settings.signing_algorithm
        ))
    })?;

    let private_key_pem = std::fs::read(&settings.private_key_path)?;
    let signing_key = SigningKey::from_rsa_pem(algorithm, &private_key_pem)?;

    let transport_cert_pem = settings
        .transport_cert_path
        .as_deref()
        .map(std::fs::read)
        .transpose()?;
    let transport_key_pem = settings
        .transport_key_path
        .as_deref()
        .map(std::fs::read)
        .transpose()?;
    let root_cas_pem = settings
        .root_ca_paths
        .iter()
        .map(std::fs::read)
        .collect::<Result<Vec<_>, _>>()?;

    let http_config = HttpClientConfig {
        timeout: Duration::from_secs(settings.request_timeout_seconds),
        client_cert_pem: transport_cert_pem.clone(),
        client_key_pem: transport_key_pem,
        root_cas_pem,
        insecure_skip_verify: settings.insecure_skip_verify,
    };
    let dispatcher: Arc<dyn HttpDispatcher> = Arc::new(build_client(&http_config)?);

    tracing::info!(endpoint = %settings.wellknown_endpoint, "fetching discovery document");
    let openid = fetch_openid_configuration(dispatcher.as_ref(), &settings.wellknown_endpoint)?;
    let registration_endpoint = openid.registration_endpoint.clone().ok_or_else(|| {
        CliError::Config("server does not advertise a registration endpoint".to_string())
    })?;

    let authoriser = Authoriser::select(AuthoriserConfig {
        openid,
        ssa: settings.ssa.clone(),
        kid: settings.kid.clone(),
        software_id: settings.software_id.clone(),
        redirect_uris: settings.redirect_uris.clone(),
        signing_key,
        expiry: chrono::Duration::seconds(settings.token_expiry_seconds),
        transport: TransportIdentity {
            subject_dn_override: settings.tls_client_auth_subject_dn.clone(),
            certificate_pem: transport_cert_pem,
        },
    })?;
    if authoriser.method_name().is_none() {
        output::warning("no supported token endpoint auth method advertised; runs will fail");
    }

    let suite_config = SuiteConfig {
        registration_endpoint,
        authoriser: Arc::new(authoriser),
        dispatcher,
    };
    let manifest = build_manifest(&suite_config, spec_version, args.filter.as_deref())?;

    let result = manifest.run();
    output::print_result(&result, verbose);

    if let Some(path) = &args.report {
        report::write_report(path, &result)?;
        output::info(&format!("report written to {}", path.display()));
    }

    Ok(i32::from(result.fail()))
}

fn build_manifest(
    config: &SuiteConfig,
    version: SpecVersion,
    filter: Option<&str>,
) -> CliResult<Manifest> {
    let manifest = match version {
        SpecVersion::V3_2 => dcr32::manifest(config)?,
        SpecVersion::V3_3 => dcr33::manifest(config)?,
    };

    match filter {
        Some(expression) => Ok(manifest.filter(expression)?),
        None => Ok(manifest),
    }
}
