use device_actor::DeviceClient;
use home_mesh::air_condition_actor::AirConditionStatus;
use home_mesh::clients::AirConditionClient;
use home_mesh::model::SensorMode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tokio::task::JoinHandle;

const SENSOR_INTERVAL: Duration = Duration::from_secs(5);

fn spawn_air_condition() -> (AirConditionClient, JoinHandle<()>) {
    let (actor, address) = home_mesh::air_condition_actor::new(SENSOR_INTERVAL, StdRng::seed_from_u64(5));
    let handle = tokio::spawn(actor.run(()));
    (AirConditionClient::new(address, Duration::from_secs(1)), handle)
}

/// Polls the status until `done` holds. Manual readings travel through the
/// sensor and back, so they land a few hops after the command.
async fn status_when(ac: &AirConditionClient, done: impl Fn(&AirConditionStatus) -> bool) -> AirConditionStatus {
    for _ in 0..100 {
        let status = ac.get_status().await.unwrap();
        if done(&status) {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("air condition never reached the expected state");
}

#[tokio::test]
async fn test_manual_readings_drive_power_through_the_sensor() {
    let (ac, handle) = spawn_air_condition();

    ac.switch_sensor_mode(SensorMode::Manual).unwrap();
    ac.submit_reading(27.5).unwrap();
    let status = status_when(&ac, |s| s.last_temperature == Some(27.5)).await;
    assert!(status.on);
    assert_eq!(status.sensor_mode, SensorMode::Manual);

    ac.submit_reading(25.0).unwrap();
    let status = status_when(&ac, |s| s.last_temperature == Some(25.0)).await;
    assert!(!status.on);

    ac.inner().stop().unwrap();
    handle.await.unwrap();
}

#[tokio::test]
async fn test_manual_power_is_overridden_by_the_next_reading() {
    let (ac, handle) = spawn_air_condition();

    ac.switch_sensor_mode(SensorMode::Manual).unwrap();
    ac.set_power(true).unwrap();
    assert!(ac.get_status().await.unwrap().on);

    ac.submit_reading(21.0).unwrap();
    let status = status_when(&ac, |s| s.last_temperature == Some(21.0)).await;
    assert!(!status.on);

    ac.inner().stop().unwrap();
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_simulated_sensor_ignores_manual_readings_and_ticks() {
    let (ac, handle) = spawn_air_condition();

    // Starts simulated: the manual reading is dropped by the sensor.
    ac.submit_reading(29.0).unwrap();
    let status = ac.get_status().await.unwrap();
    assert_eq!(status.sensor_mode, SensorMode::Simulated);

    tokio::time::sleep(SENSOR_INTERVAL + Duration::from_millis(100)).await;
    let reading = ac.get_status().await.unwrap().last_temperature.unwrap();
    assert!((20.0..30.0).contains(&reading));
    assert_ne!(reading, 29.0);

    ac.inner().stop().unwrap();
    handle.await.unwrap();
}
