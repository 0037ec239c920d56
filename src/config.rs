use crate::error::{BadEnvVarSnafu, ParsePortSnafu, RosterResult};
use dotenvy::var;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use std::{
    env::VarError,
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_addr: SocketAddr,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        let port = port_from(var("PORT"))?;

        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub const fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

fn port_from(port: Result<String, dotenvy::Error>) -> RosterResult<u16> {
    match port {
        Ok(port) => parse_port(port),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(DEFAULT_PORT),
        Err(source) => Err(source).context(BadEnvVarSnafu { name: "PORT" }),
    }
}

fn parse_port(original: String) -> RosterResult<u16> {
    original
        .trim()
        .parse()
        .context(ParsePortSnafu { original })
}

#[derive(Debug)]
pub struct DbConfig {
    uri: SecretString,
    database: &'static str,
    collection: &'static str,
}

impl DbConfig {
    pub const DATABASE: &'static str = "students";
    pub const COLLECTION: &'static str = "students";

    pub fn new() -> RosterResult<Self> {
        let name = "MONGO_URI";
        let uri = var(name).context(BadEnvVarSnafu { name })?;

        Ok(Self::from_uri(uri))
    }

    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: SecretString::from(uri.into()),
            database: Self::DATABASE,
            collection: Self::COLLECTION,
        }
    }

    pub fn uri(&self) -> &str {
        self.uri.expose_secret()
    }

    pub const fn database(&self) -> &'static str {
        self.database
    }

    pub const fn collection(&self) -> &'static str {
        self.collection
    }
}
