use std::time::{Duration, Instant};

use matchmate::route::Route;
use matchmate::ui::friends::{demo_friends, FriendsList, Presence, DEFAULT_HOLD_DURATION};

fn list() -> FriendsList {
    FriendsList::new(demo_friends(), DEFAULT_HOLD_DURATION)
}

#[test]
fn select_opens_profile_card() {
    let mut friends = list();
    friends.select(1);

    let selected = friends.state().selected_friend().unwrap();
    assert_eq!(selected.name, "또컴공이야");
    assert_eq!(selected.presence, Presence::Online);

    friends.close_profile();
    assert!(friends.state().selected_friend().is_none());
}

#[test]
fn unknown_friend_cannot_be_selected() {
    let mut friends = list();
    friends.select(99);
    assert!(friends.state().selected.is_none());
    assert_eq!(friends.open_chat(99), None);
}

#[test]
fn hold_on_card_routes_to_profile() {
    let mut friends = list();
    let now = Instant::now();
    friends.select(4);
    friends.hold_start(now);

    assert_eq!(friends.tick(now + Duration::from_millis(300)), None);
    assert_eq!(
        friends.tick(now + DEFAULT_HOLD_DURATION),
        Some(Route::Profile(4))
    );
    assert_eq!(friends.tick(now + Duration::from_secs(5)), None);
}

#[test]
fn release_cancels_hold() {
    let mut friends = list();
    let now = Instant::now();
    friends.select(2);
    friends.hold_start(now);
    friends.hold_end();

    assert_eq!(friends.tick(now + Duration::from_secs(1)), None);
}

#[test]
fn custom_hold_duration_is_respected() {
    let mut friends = FriendsList::new(demo_friends(), Duration::from_millis(100));
    let now = Instant::now();
    friends.select(3);
    friends.hold_start(now);

    assert_eq!(
        friends.tick(now + Duration::from_millis(100)),
        Some(Route::Profile(3))
    );
}

#[test]
fn chat_action_routes_to_thread() {
    let mut friends = list();
    let route = friends.open_chat(2).unwrap();
    assert_eq!(route, Route::Chat(2));
    assert_eq!(route.friend_id(), 2);
    assert_eq!(route.to_string(), "chat/2");
}
