use std::net::SocketAddr;
use std::time::Duration;

use awair_exporter::awair::{ClientError, DeviceClient as _, HttpClient};
use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

const READINGS_BODY: &str = r#"{"score":85,"dew_point":12.3,"temp":21.5,"humid":40.2,"abs_humid":7.1,"co2":612,"co2_est":600,"co2_est_baseline":4200,"voc":250,"voc_baseline":18000,"voc_h2_raw":12500,"voc_ethanol_raw":18800,"pm25":3,"pm10_est":5}"#;
const CONFIG_BODY: &str = r#"{"device_uuid":"awair-123","fw_version":"1.2.3","voc_feature_set":3}"#;

fn client_for(addr: SocketAddr) -> HttpClient {
    HttpClient::new(&addr.to_string(), Duration::from_secs(5)).unwrap()
}

/// Answers every connection with the same canned response and reports each
/// request line back to the test.
async fn canned_device(
    status_line: &'static str,
    body: &'static str,
) -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let tx = tx.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }

                if let Some(line) = String::from_utf8_lossy(&request).lines().next() {
                    let _ = tx.send(line.to_owned());
                }

                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, rx)
}

#[tokio::test]
async fn readings_requests_the_air_data_path() {
    let (addr, mut requests) = canned_device("HTTP/1.1 200 OK", READINGS_BODY).await;
    let client = client_for(addr);

    let readings = client.readings().await.unwrap();

    assert_eq!(readings.score, 85.0);
    assert_eq!(readings.humidity, 40.2);
    assert_eq!(readings.pm10_est, 5.0);
    assert_eq!(
        requests.recv().await.unwrap(),
        "GET /air-data/latest HTTP/1.1"
    );
}

#[tokio::test]
async fn configuration_requests_the_settings_path() {
    let (addr, mut requests) = canned_device("HTTP/1.1 200 OK", CONFIG_BODY).await;
    let client = client_for(addr);

    let config = client.configuration().await.unwrap();

    assert_eq!(config.device_uuid, "awair-123");
    assert_eq!(config.fw_version, "1.2.3");
    assert_eq!(config.voc_feature_set, 3);
    assert_eq!(
        requests.recv().await.unwrap(),
        "GET /settings/config/data HTTP/1.1"
    );
}

#[tokio::test]
async fn malformed_body_surfaces_as_decode_error() {
    let (addr, _requests) = canned_device("HTTP/1.1 200 OK", "not json").await;
    let client = client_for(addr);

    let err = client.readings().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)), "got {err}");
}

#[tokio::test]
async fn error_status_surfaces_as_transport_error() {
    let (addr, _requests) = canned_device("HTTP/1.1 500 Internal Server Error", "{}").await;
    let client = client_for(addr);

    let err = client.configuration().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)), "got {err}");
}

#[tokio::test]
async fn refused_connection_surfaces_as_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client.readings().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)), "got {err}");
}
