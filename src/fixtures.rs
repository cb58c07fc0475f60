// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static fixture data standing in for persisted records.
//!
//! Built once on first access and never mutated.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::models::{
    ClassSession, ClassStatus, Currency, DayOfWeek, Member, Payment, PaymentMethod, PaymentStatus,
    StaffMember, StaffRole, StaffStatus, Wod,
};

static MEMBERS: LazyLock<Vec<Member>> = LazyLock::new(|| {
    [
        ("m1", "Lucía Fernández", "lucia.fernandez@example.com"),
        ("m2", "Marco Rossi", "marco.rossi@example.com"),
        ("m3", "Aisha Bello", "aisha.bello@example.com"),
        ("m4", "Tom Becker", "tom.becker@example.com"),
        ("m5", "Sofia Lindqvist", "sofia.lindqvist@example.com"),
        ("m6", "Diego Álvarez", "diego.alvarez@example.com"),
        ("m7", "Hannah Kim", "hannah.kim@example.com"),
        ("m8", "Pierre Dubois", "pierre.dubois@example.com"),
    ]
    .into_iter()
    .map(|(id, name, email)| Member {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
    })
    .collect()
});

static CLASSES: LazyLock<Vec<ClassSession>> = LazyLock::new(|| {
    use ClassStatus::*;
    use DayOfWeek::*;

    [
        ("c1", "CrossFit", Monday, (7, 0), Scheduled),
        ("c2", "Olympic Lifting", Monday, (18, 30), Full),
        ("c3", "CrossFit", Tuesday, (7, 0), Scheduled),
        ("c4", "Gymnastics", Tuesday, (19, 0), Cancelled),
        ("c5", "CrossFit", Wednesday, (7, 0), Scheduled),
        ("c6", "Endurance", Wednesday, (18, 0), Scheduled),
        ("c7", "CrossFit", Thursday, (7, 0), Full),
        ("c8", "Mobility", Friday, (12, 30), Scheduled),
        ("c9", "Team WOD", Saturday, (10, 0), Scheduled),
        ("c10", "Open Gym", Sunday, (11, 0), Scheduled),
    ]
    .into_iter()
    .map(|(id, name, day, (hour, minute), status)| ClassSession {
        id: id.to_string(),
        name: name.to_string(),
        day,
        time: clock(hour, minute),
        status,
    })
    .collect()
});

static PAYMENTS: LazyLock<Vec<Payment>> = LazyLock::new(|| {
    use Currency::*;
    use PaymentMethod::*;
    use PaymentStatus::*;

    [
        ("p1", "m1", 6500, Eur, Card, Paid, (2025, 1, 2), None),
        ("p2", "m2", 6500, Eur, Transfer, Paid, (2025, 1, 3), None),
        ("p3", "m3", 6500, Eur, Cash, Pending, (2025, 1, 5), Some("Pays at front desk")),
        ("p4", "m4", 7900, Usd, Card, Paid, (2025, 1, 6), None),
        ("p5", "m5", 6500, Eur, Card, Failed, (2025, 1, 7), Some("Card declined")),
        ("p6", "m6", 4500, Eur, Transfer, Refunded, (2025, 1, 9), Some("Injury, plan paused")),
        ("p7", "m7", 7900, Usd, Card, Pending, (2025, 1, 10), None),
        ("p8", "m8", 6500, Eur, Cash, Paid, (2025, 1, 12), None),
        ("p9", "m1", 2000, Eur, Card, Paid, (2025, 1, 15), Some("Drop-in friend pass")),
        ("p10", "m9", 6500, Eur, Transfer, Pending, (2025, 1, 16), None),
    ]
    .into_iter()
    .map(
        |(id, member_id, amount_cents, currency, method, status, (y, m, d), notes)| Payment {
            id: id.to_string(),
            member_id: member_id.to_string(),
            amount_cents,
            currency,
            method,
            status,
            date: day(y, m, d),
            notes: notes.map(str::to_string),
        },
    )
    .collect()
});

static STAFF: LazyLock<Vec<StaffMember>> = LazyLock::new(|| {
    use StaffRole::*;
    use StaffStatus::*;

    [
        ("s1", "Carla Méndez", "carla@boxboard.example", "+34 600 111 222", Owner, Active, 1_672_567_200),
        ("s2", "Jonas Weber", "jonas@boxboard.example", "+34 600 333 444", Coach, Active, 1_680_336_000),
        ("s3", "Priya Nair", "priya@boxboard.example", "+34 600 555 666", Coach, Inactive, 1_688_198_400),
        ("s4", "Omar Haddad", "omar@boxboard.example", "+34 600 777 888", Staff, Active, 1_704_067_200),
    ]
    .into_iter()
    .map(|(id, name, email, phone, role, status, created)| StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        role,
        status,
        created_at: DateTime::<Utc>::from_timestamp(created, 0).unwrap_or_default(),
    })
    .collect()
});

static WODS: LazyLock<Vec<Wod>> = LazyLock::new(|| {
    [
        ("w1", (2025, 1, 13), "Fran", Some("21-15-9 thrusters and pull-ups")),
        ("w2", (2025, 1, 14), "Cindy", Some("20 min AMRAP: 5 pull-ups, 10 push-ups, 15 squats")),
        ("w3", (2025, 1, 15), "Back Squat 5x5", None),
        ("w4", (2025, 1, 16), "Helen", Some("3 rounds: 400 m run, 21 KB swings, 12 pull-ups")),
        ("w5", (2025, 1, 17), "Partner Chipper", Some("Teams of two, 30 min cap")),
    ]
    .into_iter()
    .map(|(id, (y, m, d), title, notes)| Wod {
        id: id.to_string(),
        date: day(y, m, d),
        title: title.to_string(),
        notes: notes.map(str::to_string),
    })
    .collect()
});

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn members() -> &'static [Member] {
    &MEMBERS
}

pub fn classes() -> &'static [ClassSession] {
    &CLASSES
}

pub fn payments() -> &'static [Payment] {
    &PAYMENTS
}

pub fn staff() -> &'static [StaffMember] {
    &STAFF
}

pub fn wods() -> &'static [Wod] {
    &WODS
}

/// Look up a staff member by id.
pub fn find_staff(id: &str) -> Option<&'static StaffMember> {
    staff().iter().find(|s| s.id == id)
}

/// Look up a member's display name; payments may reference unknown members.
pub fn member_name(id: &str) -> Option<&'static str> {
    members()
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name.as_str())
}

/// Most recent WOD by date.
pub fn latest_wod() -> Option<&'static Wod> {
    wods().iter().max_by_key(|w| w.date)
}

/// All WODs, newest first.
pub fn wods_newest_first() -> Vec<&'static Wod> {
    let mut found: Vec<_> = wods().iter().collect();
    found.sort_by(|a, b| b.date.cmp(&a.date));
    found
}

/// Classes held on `day`, in time order.
pub fn classes_on(day: DayOfWeek) -> Vec<&'static ClassSession> {
    let mut found: Vec<_> = classes().iter().filter(|c| c.day == day).collect();
    found.sort_by_key(|c| c.time);
    found
}
