use cryptoauth::device::timing::{lookup, table_for};
use cryptoauth::{ClockDivider, DeviceModel, Error};
use proptest::prelude::*;

const MODELS: [DeviceModel; 10] = [
    DeviceModel::Sha204a,
    DeviceModel::Sha206a,
    DeviceModel::Ecc108a,
    DeviceModel::Ecc508a,
    DeviceModel::Ecc608,
    DeviceModel::Ecc204,
    DeviceModel::Ta010,
    DeviceModel::Sha104,
    DeviceModel::Sha105,
    DeviceModel::Unknown,
];

fn divider(i: u8) -> Option<ClockDivider> {
    match i % 4 {
        0 => Some(ClockDivider::M0),
        1 => Some(ClockDivider::M1),
        2 => Some(ClockDivider::M2),
        _ => None,
    }
}

#[test]
fn every_tabulated_entry_is_found() {
    for model in MODELS {
        for d in 0..4 {
            for entry in table_for(model, divider(d)) {
                assert_eq!(lookup(entry.opcode, model, divider(d)), Ok(entry.ms));
                assert!(entry.ms > 0);
            }
        }
    }
}

proptest! {
    #[test]
    fn lookup_agrees_with_table(model_idx in 0usize..MODELS.len(), d in 0u8..4, opcode in any::<u8>()) {
        let model = MODELS[model_idx];
        let table = table_for(model, divider(d));
        match table.iter().find(|e| e.opcode == opcode) {
            Some(entry) => {
                prop_assert_eq!(lookup(opcode, model, divider(d)), Ok(entry.ms));
            }
            None => {
                prop_assert_eq!(
                    lookup(opcode, model, divider(d)),
                    Err(Error::UnsupportedOpcode { opcode, model })
                );
            }
        }
    }
}
