use std::{
    collections::{BTreeMap, HashMap},
    future::Future,
    time::Duration,
};

use async_trait::async_trait;
use tracing::debug;
use zbus::{Connection, Proxy, fdo, zvariant::OwnedValue};

use super::{
    MPRIS_OBJECT_PATH, MediaError, MediaPlayer2PlayerProxy, PLAYER_INTERFACE, PlayerHandle,
    PlayerMethod, PropValue,
};

const PROPERTIES_INTERFACE: &str = "org.freedesktop.DBus.Properties";

/// The bus operations `PlayerClient` relies on.
///
/// Property access and method calls are always scoped to the
/// `org.mpris.MediaPlayer2.Player` interface of the given player.
#[async_trait]
pub trait MprisBus: Send + Sync {
    /// Names currently registered on the bus, in bus order
    ///
    /// # Errors
    /// Returns `MediaError::Discovery` if the names cannot be listed
    async fn list_names(&self) -> Result<Vec<String>, MediaError>;

    /// Read one property
    ///
    /// # Errors
    /// Returns `MediaError::PropertyAccess` if the call fails or the value
    /// cannot be represented
    async fn get_property(&self, player: &PlayerHandle, key: &str)
    -> Result<PropValue, MediaError>;

    /// Read every property of the player interface
    ///
    /// # Errors
    /// Returns `MediaError::PropertyAccess` if the call fails
    async fn get_all_properties(
        &self,
        player: &PlayerHandle,
    ) -> Result<BTreeMap<String, PropValue>, MediaError>;

    /// Write one property
    ///
    /// # Errors
    /// Returns `MediaError::PropertyAccess` if the call fails or the value is
    /// not a scalar
    async fn set_property(
        &self,
        player: &PlayerHandle,
        key: &str,
        value: &PropValue,
    ) -> Result<(), MediaError>;

    /// Invoke a player method
    ///
    /// # Errors
    /// Returns `MediaError::ControlFailed` if the call fails
    async fn call_method(&self, player: &PlayerHandle, method: PlayerMethod)
    -> Result<(), MediaError>;
}

/// Runs `call`, failing with `MediaError::Timeout` once `limit` elapses.
///
/// Without a limit the call may take as long as the bus does.
pub(crate) async fn bounded<T, F>(limit: Option<Duration>, call: F) -> Result<T, MediaError>
where
    F: Future<Output = Result<T, MediaError>>,
{
    match limit {
        Some(limit) => tokio::time::timeout(limit, call)
            .await
            .map_err(|_| MediaError::Timeout(limit))?,
        None => call.await,
    }
}

/// `MprisBus` backed by a zbus session connection.
pub struct ZbusBus {
    connection: Connection,
    call_timeout: Option<Duration>,
}

impl ZbusBus {
    /// Connect to the session bus.
    ///
    /// # Errors
    /// Returns `MediaError::Connection` if no session bus is reachable
    pub async fn session(call_timeout: Option<Duration>) -> Result<Self, MediaError> {
        let connection = Connection::session()
            .await
            .map_err(|e| MediaError::Connection(e.to_string()))?;

        debug!("Connected to session bus");
        Ok(Self::new(connection, call_timeout))
    }

    /// Wrap an existing connection.
    pub fn new(connection: Connection, call_timeout: Option<Duration>) -> Self {
        Self {
            connection,
            call_timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, MediaError>
    where
        F: Future<Output = Result<T, MediaError>>,
    {
        bounded(self.call_timeout, call).await
    }

    async fn properties<'p>(&self, player: &'p PlayerHandle) -> zbus::Result<Proxy<'p>> {
        Proxy::new(
            &self.connection,
            player.bus_name(),
            MPRIS_OBJECT_PATH,
            PROPERTIES_INTERFACE,
        )
        .await
    }

    async fn player<'p>(
        &self,
        player: &'p PlayerHandle,
    ) -> zbus::Result<MediaPlayer2PlayerProxy<'p>> {
        MediaPlayer2PlayerProxy::builder(&self.connection)
            .destination(player.bus_name())?
            .build()
            .await
    }
}

#[async_trait]
impl MprisBus for ZbusBus {
    async fn list_names(&self) -> Result<Vec<String>, MediaError> {
        self.bounded(async {
            let dbus_proxy = fdo::DBusProxy::new(&self.connection)
                .await
                .map_err(|e| MediaError::Discovery(e.to_string()))?;

            let names = dbus_proxy
                .list_names()
                .await
                .map_err(|e| MediaError::Discovery(e.to_string()))?;

            Ok(names.into_iter().map(|name| name.to_string()).collect())
        })
        .await
    }

    async fn get_property(
        &self,
        player: &PlayerHandle,
        key: &str,
    ) -> Result<PropValue, MediaError> {
        self.bounded(async {
            let proxy = self
                .properties(player)
                .await
                .map_err(|e| MediaError::property(key, e))?;

            let value: OwnedValue = proxy
                .call("Get", &(PLAYER_INTERFACE, key))
                .await
                .map_err(|e| MediaError::property(key, e))?;

            PropValue::from_value(&value)
                .ok_or_else(|| MediaError::property(key, "unsupported value type"))
        })
        .await
    }

    async fn get_all_properties(
        &self,
        player: &PlayerHandle,
    ) -> Result<BTreeMap<String, PropValue>, MediaError> {
        self.bounded(async {
            let proxy = self
                .properties(player)
                .await
                .map_err(|e| MediaError::property("*", e))?;

            let values: HashMap<String, OwnedValue> = proxy
                .call("GetAll", &(PLAYER_INTERFACE,))
                .await
                .map_err(|e| MediaError::property("*", e))?;

            let mut properties = BTreeMap::new();
            for (key, value) in &values {
                match PropValue::from_value(value) {
                    Some(converted) => {
                        properties.insert(key.clone(), converted);
                    }
                    None => debug!("Skipping property {key} with unsupported value type"),
                }
            }
            Ok(properties)
        })
        .await
    }

    async fn set_property(
        &self,
        player: &PlayerHandle,
        key: &str,
        value: &PropValue,
    ) -> Result<(), MediaError> {
        let value = value
            .to_value()
            .ok_or_else(|| MediaError::property(key, "only scalar values can be written"))?;

        self.bounded(async {
            let proxy = self
                .properties(player)
                .await
                .map_err(|e| MediaError::property(key, e))?;

            proxy
                .call::<_, _, ()>("Set", &(PLAYER_INTERFACE, key, value))
                .await
                .map_err(|e| MediaError::property(key, e))
        })
        .await
    }

    async fn call_method(
        &self,
        player: &PlayerHandle,
        method: PlayerMethod,
    ) -> Result<(), MediaError> {
        let failed = |e: zbus::Error| MediaError::ControlFailed {
            method: method.name(),
            details: e.to_string(),
        };

        self.bounded(async {
            let proxy = self.player(player).await.map_err(failed)?;

            let result = match method {
                PlayerMethod::PlayPause => proxy.play_pause().await,
                PlayerMethod::Play => proxy.play().await,
                PlayerMethod::Stop => proxy.stop().await,
                PlayerMethod::Next => proxy.next().await,
                PlayerMethod::Previous => proxy.previous().await,
                PlayerMethod::Seek(offset) => proxy.seek(offset).await,
            };
            result.map_err(failed)
        })
        .await
    }
}
