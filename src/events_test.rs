#![cfg(test)]

use crate::test::{Fixture, START, TREASURY_FUNDING};
use crate::{math::ONE, Role};
use soroban_sdk::{symbol_short, Address};

#[test]
fn test_create_stream_emits_created() {
    let f = Fixture::new();
    let stream_id = f.open_stream(ONE / 100);

    let data: Option<(Address, Address, i128)> =
        f.last_event((symbol_short!("created"), stream_id));
    assert_eq!(data, Some((f.hr.clone(), f.employee.clone(), ONE / 100)));
}

#[test]
fn test_set_tax_rate_emits_old_and_new_rate() {
    let f = Fixture::new();
    f.client.set_tax_rate(&f.admin, &2_000);

    let data: Option<(u32, u32)> = f.last_event((symbol_short!("tax_rate"),));
    assert_eq!(data, Some((1_000, 2_000)));
}

#[test]
fn test_withdraw_emits_gross_tax_and_net() {
    let f = Fixture::new();
    let stream_id = f.open_stream(ONE);

    f.at(START + 100);
    f.client.withdraw(&f.employee, &stream_id);

    let data: Option<(Address, i128, i128, i128)> =
        f.last_event((symbol_short!("withdraw"), stream_id));
    assert_eq!(
        data,
        Some((f.employee.clone(), 100 * ONE, 10 * ONE, 90 * ONE))
    );
}

#[test]
fn test_cancel_emits_settlement_and_payout() {
    let f = Fixture::new();
    let stream_id = f.open_stream(ONE);

    f.at(START + 10);
    f.client.cancel_stream(&f.hr, &stream_id);

    let settled: Option<(Address, i128, i128, i128)> =
        f.last_event((symbol_short!("withdraw"), stream_id));
    assert_eq!(settled, Some((f.employee.clone(), 10 * ONE, ONE, 9 * ONE)));

    let cancelled: Option<(Address, i128)> = f.last_event((symbol_short!("cancel"), stream_id));
    assert_eq!(cancelled, Some((f.hr.clone(), 9 * ONE)));

    let forfeited: Option<(Address, i128)> = f.last_event((symbol_short!("forfeit"), stream_id));
    assert_eq!(forfeited, None);
}

#[test]
fn test_unfundable_cancel_emits_forfeit() {
    let f = Fixture::new();
    let stream_id = f.open_stream(1_000 * ONE);

    f.at(START + 1_000);
    f.client.cancel_stream(&f.hr, &stream_id);

    let forfeited: Option<(Address, i128)> = f.last_event((symbol_short!("forfeit"), stream_id));
    assert_eq!(forfeited, Some((f.employee.clone(), 1_000_000 * ONE)));

    let cancelled: Option<(Address, i128)> = f.last_event((symbol_short!("cancel"), stream_id));
    assert_eq!(cancelled, Some((f.hr.clone(), 0)));
    assert_eq!(f.client.get_treasury_balance(), TREASURY_FUNDING);
}

#[test]
fn test_overflowing_cancel_forfeits_max_amount() {
    let f = Fixture::new();
    let stream_id = f.open_stream(i128::MAX / 2);

    f.at(START + 3);
    f.client.cancel_stream(&f.hr, &stream_id);

    let forfeited: Option<(Address, i128)> = f.last_event((symbol_short!("forfeit"), stream_id));
    assert_eq!(forfeited, Some((f.employee.clone(), i128::MAX)));
}

#[test]
fn test_pause_and_resume_emit_caller() {
    let f = Fixture::new();
    let stream_id = f.open_stream(ONE);

    f.client.pause_stream(&f.hr, &stream_id);
    let paused: Option<Address> = f.last_event((symbol_short!("paused"), stream_id));
    assert_eq!(paused, Some(f.hr.clone()));

    f.client.resume_stream(&f.admin, &stream_id);
    let resumed: Option<Address> = f.last_event((symbol_short!("resumed"), stream_id));
    assert_eq!(resumed, Some(f.admin.clone()));
}

#[test]
fn test_request_workflow_events() {
    let f = Fixture::new();

    let request_id = f.client.request_stream_start(&f.employee, &ONE);
    let requested: Option<(Address, i128)> =
        f.last_event((symbol_short!("request"), request_id));
    assert_eq!(requested, Some((f.employee.clone(), ONE)));

    let stream_id = f.client.approve_stream_request(&f.hr, &request_id);
    let approved: Option<(Address, u64)> = f.last_event((symbol_short!("approved"), request_id));
    assert_eq!(approved, Some((f.hr.clone(), stream_id)));

    let second = f.client.request_stream_start(&f.employee, &ONE);
    f.client.reject_stream_request(&f.hr, &second);
    let rejected: Option<Address> = f.last_event((symbol_short!("rejected"), second));
    assert_eq!(rejected, Some(f.hr.clone()));
}

#[test]
fn test_treasury_events() {
    let f = Fixture::new();

    f.client.fund_contract(&f.admin, &(1_000 * ONE));
    let funded: Option<i128> = f.last_event((symbol_short!("funded"), f.admin.clone()));
    assert_eq!(funded, Some(1_000 * ONE));

    f.client.award_bonus(&f.hr, &f.employee, &(5 * ONE));
    let bonus: Option<(Address, i128)> =
        f.last_event((symbol_short!("bonus"), f.employee.clone()));
    assert_eq!(bonus, Some((f.hr.clone(), 5 * ONE)));
}

#[test]
fn test_role_change_events() {
    let f = Fixture::new();

    f.client.grant_role(&f.admin, &f.outsider, &Role::PayrollManager);
    let granted: Option<(Address, Role)> = f.last_event((symbol_short!("grant"), f.admin.clone()));
    assert_eq!(granted, Some((f.outsider.clone(), Role::PayrollManager)));

    f.client.revoke_role(&f.admin, &f.outsider, &Role::PayrollManager);
    let revoked: Option<(Address, Role)> =
        f.last_event((symbol_short!("revoke"), f.admin.clone()));
    assert_eq!(revoked, Some((f.outsider.clone(), Role::PayrollManager)));
}
