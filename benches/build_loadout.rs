use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ship_loadout::core::config::ImportConfig;
use ship_loadout::{Catalogs, LoadoutEvent};
use std::path::Path;

const COBRA_EVENT: &str = r#"{
    "event": "Loadout",
    "Ship": "CobraMkIII",
    "Modules": [
        { "Slot": "CargoHatch", "Item": "ModularCargoBayDoor", "On": true, "Priority": 2 },
        { "Slot": "Armour", "Item": "CobraMkIII_Armour_Grade3", "On": true, "Priority": 1,
          "Engineering": { "BlueprintName": "Armour_HeavyDuty", "Level": 2,
            "Modifiers": [ { "Label": "DefenceModifierHealthMultiplier", "Value": 2.07, "OriginalValue": 1.8, "LessIsGood": 0 } ] } },
        { "Slot": "PowerPlant", "Item": "Int_Powerplant_Size4_Class5", "On": true, "Priority": 0,
          "Engineering": { "BlueprintName": "PowerPlant_Boosted", "Level": 3,
            "ExperimentalEffect": "special_powerplant_highcharge",
            "Modifiers": [
              { "Label": "PowerCapacity", "Value": 17.472, "OriginalValue": 15.6, "LessIsGood": 0 },
              { "Label": "HeatEfficiency", "Value": 0.5, "OriginalValue": 0.4, "LessIsGood": 1 } ] } },
        { "Slot": "MainEngines", "Item": "Int_Engine_Size4_Class5", "On": true, "Priority": 0 },
        { "Slot": "FrameShiftDrive", "Item": "Int_Hyperdrive_Size4_Class5", "On": true, "Priority": 0 },
        { "Slot": "LifeSupport", "Item": "Int_LifeSupport_Size3_Class1", "On": true, "Priority": 0 },
        { "Slot": "PowerDistributor", "Item": "Int_PowerDistributor_Size3_Class5", "On": true, "Priority": 0 },
        { "Slot": "Radar", "Item": "Int_Sensors_Size3_Class1", "On": true, "Priority": 1 },
        { "Slot": "FuelTank", "Item": "Int_FuelTank_Size4_Class3", "On": true, "Priority": 0 },
        { "Slot": "MediumHardpoint1", "Item": "Hpt_BeamLaser_Fixed_Medium", "On": true, "Priority": 1 },
        { "Slot": "MediumHardpoint2", "Item": "Hpt_MultiCannon_Gimbal_Medium", "On": true, "Priority": 1 },
        { "Slot": "SmallHardpoint1", "Item": "Hpt_PulseLaser_Gimbal_Small", "On": true, "Priority": 1 },
        { "Slot": "TinyHardpoint1", "Item": "Hpt_ShieldBooster_Size0_Class5", "On": true, "Priority": 0 },
        { "Slot": "Slot01_Size4", "Item": "Int_CargoRack_Size4_Class1", "On": true, "Priority": 1 },
        { "Slot": "Slot03_Size4", "Item": "Int_ShieldGenerator_Size3_Class5", "On": true, "Priority": 0 },
        { "Slot": "Slot07_Size1", "Item": "Int_DockingComputer_Standard", "On": true, "Priority": 3 }
    ]
}"#;

fn load_catalogs() -> Catalogs {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    Catalogs::load_directory(&dir).expect("bundled catalogs should load")
}

fn bench_build(c: &mut Criterion) {
    let catalogs = load_catalogs();
    let builder = catalogs
        .builder()
        .with_config(ImportConfig::default())
        .expect("default config is valid");
    let event: LoadoutEvent = serde_json::from_str(COBRA_EVENT).expect("valid event");

    let mut group = c.benchmark_group("build_loadout");
    group.throughput(Throughput::Elements(1));
    group.bench_function("cobra_from_event", |b| {
        b.iter(|| builder.build(black_box(&event)))
    });
    group.bench_function("cobra_from_json", |b| {
        b.iter(|| builder.build_from_json(black_box(COBRA_EVENT)))
    });
    group.finish();

    let mut group = c.benchmark_group("build_many");
    for count in [16usize, 256, 1024] {
        let events = vec![event.clone(); count];
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| builder.build_many(black_box(events)))
        });
    }
    group.finish();
}

criterion_group!(loadout_benches, bench_build);
criterion_main!(loadout_benches);
