// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::Timelike;

fn wall(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(hh, mm, 0))
        .unwrap()
}

#[test]
fn system_clock_returns_non_decreasing_time() {
    let clock = SystemClock;
    let t1 = clock.now();
    std::thread::sleep(std::time::Duration::from_millis(1));
    let t2 = clock.now();
    assert!(t2 >= t1);
}

#[test]
fn fake_clock_can_be_advanced() {
    let clock = FakeClock::at(wall(2026, 3, 1, 7, 59));
    clock.advance(Duration::minutes(1));
    assert_eq!(clock.now().hour(), 8);
    assert_eq!(clock.now().minute(), 0);
}

#[test]
fn fake_clock_is_cloneable_and_shared() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::seconds(30));
    let t2 = clock1.now();
    assert_eq!((t2 - t1).num_seconds(), 30);
}

#[test]
fn fake_clock_today_follows_midnight() {
    let clock = FakeClock::at(wall(2026, 3, 1, 23, 59));
    assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());

    clock.advance(Duration::minutes(1));
    assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
}

#[test]
fn set_hm_keeps_the_date() {
    let clock = FakeClock::at(wall(2026, 3, 1, 6, 0));
    clock.set_hm(8, 30);
    assert_eq!(clock.now().naive_local(), wall(2026, 3, 1, 8, 30));
}
