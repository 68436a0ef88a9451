//! Request builder — form snapshot in, validated descriptor out.
//!
//! `build` is a pure function: it never mutates the form, performs no
//! I/O, and yields the same descriptor for the same snapshot. The match
//! over the form union is exhaustive, so adding a protocol without a
//! builder branch is a compile error rather than an empty payload.

use url::form_urlencoded;

use courier_domain::{
    BuildError, BuildResult, CoapForm, FormState, HttpForm, KeyValueRows, MqttForm, MqttSnForm,
    RequestDescriptor,
};

use super::headers::{auto_headers, merge_headers};

/// Builds a validated request descriptor from a form snapshot.
///
/// # Errors
///
/// Returns a [`BuildError`] when a required field is missing or out of
/// range; see the per-protocol rules on the private branch functions.
/// Malformed JSON in body/data fields is not an error.
pub fn build(form: &FormState) -> BuildResult<RequestDescriptor> {
    match form {
        FormState::Http(http) => build_http(http),
        FormState::Mqtt(mqtt) => build_mqtt(mqtt),
        FormState::MqttSn(mqtt_sn) => build_mqtt_sn(mqtt_sn),
        FormState::Coap(coap) => build_coap(coap),
    }
}

/// HTTP: requires a non-blank URL; appends the encoded query string;
/// normalizes a JSON body; merges auto and user headers.
fn build_http(form: &HttpForm) -> BuildResult<RequestDescriptor> {
    let url = form.url.trim();
    if url.is_empty() {
        return Err(BuildError::MissingUrl);
    }

    let query = encode_query(&form.query_params);
    let url = if query.is_empty() {
        url.to_string()
    } else {
        format!("{url}?{query}")
    };

    let body = if form.body.trim().is_empty() {
        None
    } else {
        Some(reserialize_json(&form.body))
    };

    Ok(RequestDescriptor::Http {
        method: form.method,
        url,
        headers: merge_headers(auto_headers(form.method), &form.headers),
        body,
    })
}

/// MQTT: requires broker, topic, a positive port and a QoS in {0, 1, 2};
/// the message is passed through as raw text.
fn build_mqtt(form: &MqttForm) -> BuildResult<RequestDescriptor> {
    let broker = form.broker.trim();
    let topic = form.topic.trim();
    if broker.is_empty() || topic.is_empty() {
        return Err(BuildError::MissingBrokerTarget);
    }

    let port = parse_port(&form.port)?;
    if form.qos > 2 {
        return Err(BuildError::InvalidQos(form.qos));
    }

    Ok(RequestDescriptor::Mqtt {
        broker: broker.to_string(),
        port,
        topic: topic.to_string(),
        qos: form.qos,
        message: form.message.clone(),
    })
}

/// MQTT-SN: requires a gateway and a positive port; the data field gets
/// the same JSON normalization as an HTTP body, empty when blank.
fn build_mqtt_sn(form: &MqttSnForm) -> BuildResult<RequestDescriptor> {
    let gateway = form.gateway.trim();
    if gateway.is_empty() {
        return Err(BuildError::MissingGateway);
    }

    let port = parse_port(&form.port)?;
    let data = if form.data.trim().is_empty() {
        String::new()
    } else {
        reserialize_json(&form.data)
    };

    Ok(RequestDescriptor::MqttSn {
        gateway: gateway.to_string(),
        port,
        data,
    })
}

/// CoAP: decomposes the raw URL into host and path; the payload is raw
/// text, absent when blank.
fn build_coap(form: &CoapForm) -> BuildResult<RequestDescriptor> {
    let (host, path) = split_coap_url(&form.raw_url)?;
    let payload = if form.payload.trim().is_empty() {
        None
    } else {
        Some(form.payload.clone())
    };

    Ok(RequestDescriptor::Coap {
        method: form.method,
        host,
        path,
        payload,
    })
}

/// Percent-encodes the non-blank query rows, preserving their order.
fn encode_query(rows: &KeyValueRows) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for row in rows.present() {
        serializer.append_pair(&row.key, &row.value);
    }
    serializer.finish()
}

/// Re-serializes JSON text into its canonical compact form, or returns
/// the text unchanged when it does not parse. Key order of the
/// re-serialization is deterministic per input.
fn reserialize_json(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => value.to_string(),
        Err(_) => text.to_string(),
    }
}

/// Parses a user-typed port string; anything but a positive integer in
/// range is an [`BuildError::InvalidPort`].
fn parse_port(raw: &str) -> BuildResult<u16> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(BuildError::InvalidPort(raw.trim().to_string())),
    }
}

/// Decomposes `coap://host:port/path` into `(host, path)`.
///
/// The literal `coap://` prefix is stripped, the remainder splits at the
/// first `/`. The host must be non-blank and contain a `:`; an absent or
/// empty path defaults to `"test"`.
fn split_coap_url(raw: &str) -> BuildResult<(String, String)> {
    let trimmed = raw.trim();
    let rest = trimmed.strip_prefix("coap://").unwrap_or(trimmed);
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));

    if host.trim().is_empty() || !host.contains(':') {
        return Err(BuildError::InvalidCoapUrl(trimmed.to_string()));
    }

    let path = if path.is_empty() { "test" } else { path };
    Ok((host.to_string(), path.to_string()))
}
