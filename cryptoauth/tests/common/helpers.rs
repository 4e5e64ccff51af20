// helpers.rs: device construction shared by integration tests

use cryptoauth::config::{ExecutionStrategy, IfaceConfig, PollingConfig};
use cryptoauth::device::Device;
use cryptoauth::test_support::{SimulatedDevice, simulated_device};
use cryptoauth::transport::RecordingDelay;
use cryptoauth::types::DeviceModel;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn polling() -> ExecutionStrategy {
    ExecutionStrategy::Polling(PollingConfig::default())
}

pub fn ecc608(sim: SimulatedDevice, strategy: ExecutionStrategy) -> Device<SimulatedDevice, RecordingDelay> {
    init_logger();
    simulated_device(sim, IfaceConfig::ecc608_i2c_default(), DeviceModel::Ecc608, strategy)
}

pub fn device(
    sim: SimulatedDevice,
    config: IfaceConfig,
    model: DeviceModel,
    strategy: ExecutionStrategy,
) -> Device<SimulatedDevice, RecordingDelay> {
    init_logger();
    simulated_device(sim, config, model, strategy)
}
