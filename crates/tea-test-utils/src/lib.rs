//! Testing utilities for TEA workspace
//!
//! Shared fixtures: a canonical offshore wind job payload covering every
//! normalization stage, plus helpers to obtain it raw, parsed or fully
//! normalized.

#![allow(missing_docs)]

use serde_json::{json, Value};
use tea_project::{BlockId, JobPayload, Project};

/// Wind turbine generator block of the fixture project
pub const WTG_BLOCK: &str = "44d5d149-ae06-4749-b308-a90c801a11ec";
/// Mooring block, supplies floating substructure properties
pub const MOORING_BLOCK: &str = "4e89c80a-8dd8-4810-b285-755f345dafb3";
/// Substructure block, supplies bottom-fixed properties
pub const SUBSTRUCTURE_BLOCK: &str = "64c5eec0-9f91-43a4-a5d3-d8d9d4abb549";
/// Offshore substation block
pub const SUBSTATION_BLOCK: &str = "8f5dd5e6-9a73-4eac-843f-f0f856f1e79e";
/// Inter-array cabling block
pub const IAC_BLOCK: &str = "d94945e9-3d9f-4e04-b08c-bc9f73b2e543";
/// Export cable block
pub const EXPORT_CABLE_BLOCK: &str = "bf837696-47ee-45dd-ac14-cbf001dd76cf";

pub fn block_id(uuid: &str) -> BlockId {
    uuid.parse().unwrap()
}

/// The canonical offshore wind job payload as raw JSON
///
/// Deliberately unsorted where normalization sorts: conversion categories,
/// parameter archetypes and prior property sequences all arrive shuffled.
/// The substructure block has no connections, so one block of the graph
/// always exercises the empty-endpoint default.
pub fn wind_job_value() -> Value {
    json!({
        "engine_job_id": 9,
        "engine_type": "evaluation",
        "algorithm": "exhaustive",
        "project": {
            "country": "Netherlands",
            "region": "North Sea",
            "pk": 12,
            "name": "Hollandse Kust Demo",
            "archetypes": ["OWF"],
            "conversions": [
                {"category": "power", "from_value": 1.0, "from_unit": "GW", "to_value": 1000.0, "to_unit": "MW"},
                {"category": "length", "from_value": 1.0, "from_unit": "km", "to_value": 1000.0, "to_unit": "m"},
                {"category": "power", "from_value": 1.0, "from_unit": "MW", "to_value": 1000.0, "to_unit": "kW"}
            ],
            "drivers": [
                {
                    "id": 1,
                    "name": "LCOE",
                    "objective": true,
                    "metric": true,
                    "properties": [
                        {"name": "target", "value": 45.0, "si_unit": "EUR/MWh"}
                    ]
                },
                {"id": 2, "name": "TRL", "objective": false, "metric": true, "properties": []}
            ],
            "parameters": [
                {"name": "water_depth", "value": 60.0, "si_unit": "m", "archetype": "OWF", "category": "Site"},
                {"name": "default_financials_project_currency", "value": "EUR", "si_unit": null, "archetype": null, "category": "Financials"},
                {"name": "default_financials_discount_rate", "value": 0.02, "si_unit": null, "archetype": null, "category": "Financials"},
                {"name": "project_area", "value": 100.0, "si_unit": "km2", "archetype": "OWF", "category": "Site"}
            ],
            "blocks": [
                {
                    "uuid": WTG_BLOCK,
                    "name": "Wind turbine generator",
                    "choices": [
                        {
                            "id": 11,
                            "name": "Turbine model",
                            "options": [
                                {
                                    "id": 101,
                                    "name": "15MW direct drive",
                                    "properties": [
                                        {"name": "ratedpower", "value": 15.0, "si_unit": "MW"},
                                        {"name": "trlmaturity", "value": 7.0, "si_unit": null}
                                    ],
                                    "tags": [
                                        {"name": "floating", "group": "si"},
                                        {"name": "prototype", "group": "maturity"},
                                        {"name": "deep-water", "group": "si"}
                                    ]
                                },
                                {
                                    "id": 102,
                                    "name": "18MW prototype",
                                    "properties": [
                                        {"name": "ratedpower", "value": 18.0, "si_unit": "MW"},
                                        {"name": "trlmaturity", "value": 5.0, "si_unit": null}
                                    ],
                                    "tags": []
                                }
                            ]
                        }
                    ],
                    "parameters": [
                        {"name": "availability", "value": 0.95, "si_unit": null}
                    ],
                    "priors": [
                        {
                            "id": 5,
                            "aggregation": "weighted_sum",
                            "driver": 1,
                            "properties": [
                                {"sequence": 2, "property": "ratedpower", "weight": 0.4},
                                {"sequence": 1, "property": "trlmaturity", "weight": 0.6}
                            ]
                        }
                    ]
                },
                {
                    "uuid": MOORING_BLOCK,
                    "name": "Mooring",
                    "choices": [
                        {
                            "id": 21,
                            "name": "Mooring system",
                            "options": [
                                {
                                    "id": 201,
                                    "name": "Catenary",
                                    "properties": [
                                        {"name": "weightpercsasize", "value": 12.0, "si_unit": "t"},
                                        {"name": "weightpermeter", "value": 30.0, "si_unit": "kg/m"},
                                        {"name": "trlmaturity", "value": 8.0, "si_unit": null}
                                    ],
                                    "tags": []
                                }
                            ]
                        }
                    ],
                    "parameters": [],
                    "priors": []
                },
                {
                    "uuid": SUBSTRUCTURE_BLOCK,
                    "name": "Substructure",
                    "choices": [
                        {
                            "id": 31,
                            "name": "Substructure type",
                            "options": [
                                {
                                    "id": 301,
                                    "name": "Monopile",
                                    "properties": [
                                        {"name": "weightpermw", "value": 55.0, "si_unit": "t/MW"},
                                        {"name": "trlmaturity", "value": 6.0, "si_unit": null}
                                    ],
                                    "tags": []
                                }
                            ]
                        }
                    ],
                    "parameters": [],
                    "priors": []
                },
                {
                    "uuid": SUBSTATION_BLOCK,
                    "name": "Offshore substation",
                    "choices": [
                        {
                            "id": 41,
                            "name": "Substation design",
                            "options": [
                                {
                                    "id": 401,
                                    "name": "HVAC topside",
                                    "properties": [
                                        {"name": "capacity", "value": 120.0, "si_unit": "MW"},
                                        {"name": "weighttopsidepermw", "value": 18.0, "si_unit": "t/MW"},
                                        {"name": "weighthullpermw", "value": 9.0, "si_unit": "t/MW"},
                                        {"name": "trlmaturity", "value": 9.0, "si_unit": null}
                                    ],
                                    "tags": []
                                }
                            ]
                        }
                    ],
                    "parameters": [],
                    "priors": []
                },
                {
                    "uuid": IAC_BLOCK,
                    "name": "Inter-array cabling",
                    "choices": [
                        {
                            "id": 51,
                            "name": "Array cable",
                            "options": [
                                {
                                    "id": 501,
                                    "name": "66kV",
                                    "properties": [
                                        {"name": "ratedpower", "value": 66.0, "si_unit": "MW"},
                                        {"name": "weightperkm", "value": 40.0, "si_unit": "t/km"}
                                    ],
                                    "tags": []
                                }
                            ]
                        }
                    ],
                    "parameters": [],
                    "priors": []
                },
                {
                    "uuid": EXPORT_CABLE_BLOCK,
                    "name": "Export cable",
                    "choices": [
                        {
                            "id": 61,
                            "name": "Export cable",
                            "options": [
                                {
                                    "id": 601,
                                    "name": "220kV",
                                    "properties": [
                                        {"name": "ratedpower", "value": 220.0, "si_unit": "MW"},
                                        {"name": "weightperkm", "value": 90.0, "si_unit": "t/km"}
                                    ],
                                    "tags": []
                                }
                            ]
                        }
                    ],
                    "parameters": [],
                    "priors": []
                }
            ],
            "connections": [
                {"connection_type": "support", "from_block_uuid": MOORING_BLOCK, "to_block_uuid": WTG_BLOCK},
                {"connection_type": "power", "from_block_uuid": WTG_BLOCK, "to_block_uuid": SUBSTATION_BLOCK},
                {"connection_type": "power", "from_block_uuid": SUBSTATION_BLOCK, "to_block_uuid": EXPORT_CABLE_BLOCK},
                {"connection_type": "power", "from_block_uuid": IAC_BLOCK, "to_block_uuid": SUBSTATION_BLOCK}
            ],
            "option_constraints": [
                {"type": "exclusive", "options": [{"option": 101}, {"option": 102}]},
                {"type": "requires", "options": [{"option": 201}]}
            ]
        }
    })
}

/// The canonical payload, parsed
pub fn wind_job() -> JobPayload {
    serde_json::from_value(wind_job_value()).unwrap()
}

/// The canonical payload, normalized with default options
pub fn wind_project() -> Project {
    Project::from_payload(wind_job()).unwrap()
}
