//! Built-in reference data: the six practice events and the group's records
//! at the time the leaderboard was started.

use crate::models::{Event, EventId, NewRecord, ResultType};

use EventId::{Clock, Cube2x2, Cube3x3, Cube4x4, OneHanded};
use ResultType::{Average, Single};

const EVENTS: &[(EventId, &str)] = &[
    (EventId::Cube3x3, "3x3x3"),
    (EventId::Cube2x2, "2x2x2"),
    (EventId::Cube4x4, "4x4x4"),
    (EventId::OneHanded, "3x3x3 OH"),
    (EventId::Pyraminx, "Pyraminx"),
    (EventId::Clock, "clock"),
];

// (name, result, method, event, type)
const RECORDS: &[(&str, &str, &str, EventId, ResultType)] = &[
    ("Cuber_魔鱼先生", "3.98", "CFOP", Cube3x3, Single),
    ("ð", "4.258", "CFOP", Cube3x3, Single),
    ("我咧个甜菜", "5.07", "CFOP", Cube3x3, Single),
    ("fish.", "5.3", "CFOP", Cube3x3, Single),
    ("虹门雨下", "5.606", "ROUX", Cube3x3, Single),
    ("风雨兼程", "5.729", "CFOP", Cube3x3, Single),
    ("神说要有羽毛", "6.533", "CFOP", Cube3x3, Single),
    ("c", "6.703", "CFOP", Cube3x3, Single),
    ("半退魔", "6.93", "CFOP", Cube3x3, Single),
    ("万顷茫然", "6.967", "ROUX", Cube3x3, Single),
    ("Cyanus", "8.05", "ROUX", Cube3x3, Single),
    ("Visionary", "8.21", "ROUX", Cube3x3, Single),
    ("归墟", "21.69", "CFOP", Cube3x3, Single),
    ("fish.", "6.57", "CFOP", Cube3x3, Average),
    ("虹门雨下", "7.727", "ROUX", Cube3x3, Average),
    ("落霞姐姐~", "7.76", "CFOP", Cube3x3, Average),
    ("ð", "8.189", "CFOP", Cube3x3, Average),
    ("半退魔", "8.78", "CFOP", Cube3x3, Average),
    ("万顷茫然", "9.275", "ROUX", Cube3x3, Average),
    ("Cyanus", "9.51", "ROUX", Cube3x3, Average),
    ("Visionary", "10.495", "ROUX", Cube3x3, Average),
    ("归墟", "25.17", "CFOP", Cube3x3, Average),
    ("半退魔", "7.6", "CFOP", OneHanded, Single),
    ("万顷茫然", "8.09", "ROUX", OneHanded, Single),
    ("Cyanus", "8.27", "ROUX", OneHanded, Single),
    ("Visionary", "8.343", "ROUX", OneHanded, Single),
    ("虹门雨下", "10.25", "ROUX", OneHanded, Single),
    ("锤子", "16.188", "ROUX", OneHanded, Single),
    ("Cyannus", "10.1", "ROUX", OneHanded, Average),
    ("半退魔", "10.16", "CFOP", OneHanded, Average),
    ("万顷茫然", "10.536", "ROUX", OneHanded, Average),
    ("虹门雨下", "11.6", "ROUX", OneHanded, Average),
    ("Visionary", "12.78", "ROUX", OneHanded, Average),
    ("锤子", "19.403", "ROUX", OneHanded, Average),
    ("我咧个甜菜", "0.731", "CLL", Cube2x2, Single),
    ("落霞姐姐~", "1.23", "CLL", Cube2x2, Single),
    ("Visionary", "1.259", "CLL", Cube2x2, Single),
    ("万顷茫然", "1.344", "CLL", Cube2x2, Single),
    ("落霞姐姐~", "1.82", "CLL", Cube2x2, Average),
    ("万顷茫然", "2.254", "CLL", Cube2x2, Average),
    ("Visionary", "2.529", "CLL", Cube2x2, Average),
    ("魔鱼先生", "19.3", "Yau", Cube4x4, Single),
    ("落霞姐姐~", "32.11", "Yau", Cube4x4, Single),
    ("会枝", "33.43", "Yau", Cube4x4, Single),
    ("ð", "40.505", "Yau", Cube4x4, Single),
    ("万顷茫然", "142.099", "基础降阶法", Cube4x4, Single),
    ("落霞姐姐~", "36", "Yau", Cube4x4, Average),
    ("会枝", "40.792", "Yau", Cube4x4, Average),
    ("ð", "54.683", "Yau", Cube4x4, Average),
    ("佳期如梦", "2.4", "未知", Clock, Single),
    ("佳期如梦", "3.31", "未知", Clock, Average),
];

pub fn reference_events() -> Vec<Event> {
    EVENTS
        .iter()
        .map(|(id, name)| Event {
            id: *id,
            name: (*name).to_string(),
        })
        .collect()
}

pub fn reference_records() -> Vec<NewRecord> {
    RECORDS
        .iter()
        .map(|(name, result, method, event_id, record_type)| NewRecord {
            name: (*name).to_string(),
            result: (*result).to_string(),
            method: (*method).to_string(),
            event_id: *event_id,
            record_type: *record_type,
        })
        .collect()
}
