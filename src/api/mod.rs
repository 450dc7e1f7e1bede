pub mod endpoint;
pub mod error;
pub mod i18n;
pub mod pipeline;
pub mod request;
pub mod response;

use crate::model::{self, Readings, SessionState, Strings};
pub use error::Error;
use futures_util::{SinkExt, StreamExt};
use i18n::LocaleStringStore;
use pipeline::{Step, STAGES};
use request::Request;
use response::Envelope;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Websocket session with one inverter.
///
/// Locale strings are fetched on the first `fetch()` and kept for the lifetime of the
/// session; create a new session to pick up changed strings.
#[derive(Debug)]
pub struct Session {
    api: model::Api,
    locale_store: LocaleStringStore,
    strings: Option<Strings>,
}

impl Session {
    pub fn new(host: impl Into<String>) -> Self {
        let api = model::Api {
            host: host.into(),
            port: model::DEFAULT_PORT,
            locale: model::DEFAULT_LOCALE.to_string(),
        };
        Session {
            locale_store: LocaleStringStore::new(api.http_url()),
            api,
            strings: None,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.api.port = port;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.api.locale = locale.into();
        self
    }

    pub fn locale_store(mut self, locale_store: LocaleStringStore) -> Self {
        self.locale_store = locale_store;
        self
    }

    /// Use `strings` instead of fetching them from the inverter.
    pub fn strings(mut self, strings: Strings) -> Self {
        self.strings = Some(strings);
        self
    }

    pub fn api(&self) -> &model::Api {
        &self.api
    }

    async fn load_strings(&mut self) -> Result<(), Error> {
        if self.strings.is_none() {
            let strings = self.locale_store.resolve(&self.api.locale).await?;
            log::debug!("loaded {} locale strings", strings.len());
            self.strings = Some(strings);
        }
        Ok(())
    }

    /// Read all live values from the inverter.
    ///
    /// A step the inverter answers without success ends the exchange early; the readings
    /// gathered up to that point are returned, which may be none at all.
    pub async fn fetch(&mut self) -> Result<Readings, Error> {
        self.load_strings().await?;
        let strings = self.strings.get_or_insert_with(Strings::new);

        let url = self.api.ws_url(endpoint::OVERVIEW);
        log::info!("connecting to {}", url);
        let (mut socket, _) = tokio_tungstenite::connect_async(url.as_str()).await?;

        let mut readings = Readings::new();
        let result = exchange(&mut socket, &self.api.locale, strings, &mut readings).await;

        if let Err(e) = socket.close(None).await {
            log::debug!("closing {}: {}", url, e);
        }

        result.map(|_| readings)
    }
}

async fn exchange(
    socket: &mut Socket,
    lang: &str,
    strings: &Strings,
    readings: &mut Readings,
) -> Result<(), Error> {
    let mut state = SessionState::default();

    for &stage in STAGES.iter() {
        let envelope = round_trip(socket, &stage.request(lang, &state)).await?;

        if !envelope.is_success() {
            log::warn!(
                "{} failed with {}: {}",
                stage.service(),
                envelope.result_code,
                envelope.result_msg
            );
            return Ok(());
        }

        let (step, entries) = stage.apply(&envelope.result_data, state, strings)?;
        readings.extend(entries);

        match step {
            Step::Continue(next) => state = next,
            Step::Stop => return Ok(()),
        }
    }

    Ok(())
}

async fn round_trip(socket: &mut Socket, request: &Request<'_>) -> Result<Envelope, Error> {
    let text = serde_json::to_string(request)
        .map_err(|e| Error::InvalidResponse(format!("{:?}", request), e.to_string()))?;
    log::trace!("service: {}, request_text: {}", request.service, text);
    socket.send(Message::Text(text)).await?;

    let response = loop {
        match socket.next().await {
            Some(Ok(Message::Text(text))) => break text,
            Some(Ok(Message::Ping(_))) | Some(Ok(Message::Pong(_))) => continue,
            Some(Ok(Message::Close(_))) | None => {
                return Err(Error::WebsocketError(format!(
                    "connection closed awaiting {}",
                    request.service
                )))
            }
            Some(Ok(other)) => {
                return Err(Error::InvalidResponse(
                    other.to_string(),
                    String::from("expected a text frame"),
                ))
            }
            Some(Err(e)) => return Err(e.into()),
        }
    };

    log::trace!("service: {}, response_text: {}", request.service, response);

    serde_json::from_str(&response).map_err(|e| Error::InvalidResponse(response, e.to_string()))
}
