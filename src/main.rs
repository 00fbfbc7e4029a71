use std::path::PathBuf;
use std::time::{Instant, SystemTime};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use matchmate::config::Config;
use matchmate::logging::init_tracing;
use matchmate::profile::{demo_candidates, load_or_seed, JsonFileStore, ProfileStore, UserProfile};
use matchmate::services::{DescriptionClient, TagClient};
use matchmate::ui::chat::{ChatThread, REACTIONS};
use matchmate::ui::friends::{demo_friends, display_name, FriendsList};
use matchmate::ui::intro::IntroForm;
use matchmate::ui::notifications::{Notification, NotificationCenter, NotificationKind};
use matchmate::ui::swipe::{open_match_chat, SwipeDecisionEngine, SwipeEffect};

#[derive(Debug, Parser)]
#[command(name = "matchmate", version, about = "Matching, notification and introduction engines")]
struct Cli {
    /// Config file (default: ~/.config/matchmate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Inspect or reset the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Extract tags from a photo via the tag service
    Tags {
        /// Image file to upload
        image: PathBuf,
    },
    /// Generate a new introduction for the stored profile and save it
    Describe,
    /// Replay a scripted session through the interaction engines
    Demo,
}

#[derive(Debug, Subcommand)]
enum ProfileAction {
    /// Print the stored profile, seeding the default one if absent
    Show,
    /// Overwrite the stored profile with the default one
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let store = JsonFileStore::new(
        config
            .profile
            .store_path
            .clone()
            .unwrap_or_else(JsonFileStore::default_path),
    );

    match cli.command {
        Command::Profile { action } => run_profile(&store, action),
        Command::Tags { image } => run_tags(&config, image).await,
        Command::Describe => run_describe(&config, &store).await,
        Command::Demo => {
            run_demo(&config);
            Ok(())
        }
    }
}

fn run_profile(store: &JsonFileStore, action: ProfileAction) -> anyhow::Result<()> {
    let profile = match action {
        ProfileAction::Show => load_or_seed(store)?,
        ProfileAction::Reset => {
            let profile = UserProfile::default();
            store.save(&profile)?;
            profile
        }
    };
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

async fn run_tags(config: &Config, image: PathBuf) -> anyhow::Result<()> {
    let client = TagClient::new(&config.services)?;
    let tags = client
        .extract_tags_from_file(&image)
        .await
        .context("Failed to generate tags")?;

    for tag in tags {
        println!("{}", tag);
    }
    Ok(())
}

async fn run_describe(config: &Config, store: &JsonFileStore) -> anyhow::Result<()> {
    let client = DescriptionClient::new(&config.services)?;
    let mut profile = load_or_seed(store)?;
    let mut form = IntroForm::prefilled(&config.intro, &config.services, &profile);

    let Some(description) = form.generate_description(&client).await else {
        let reason = form
            .state()
            .notice
            .as_ref()
            .map(|n| n.message.clone())
            .or_else(|| form.state().errors.values().next().map(|e| e.to_string()))
            .unwrap_or_else(|| "Description was not generated".to_string());
        bail!(reason);
    };

    profile.description = description;
    store.save(&profile)?;
    println!("{}", profile.description);
    Ok(())
}

fn run_demo(config: &Config) {
    let now = Instant::now();

    let mut center = NotificationCenter::new(config.notifications.toast_duration());
    for notification in [
        Notification::new(1, NotificationKind::Like, 1, "New like", "Someone liked your profile"),
        Notification::new(2, NotificationKind::Chat, 2, "New message", "Hi there!"),
        Notification::new(3, NotificationKind::Match, 2, "It's a match", "Say hello"),
        Notification::new(4, NotificationKind::System, 0, "Welcome", "Finish your profile"),
    ] {
        center.add_notification(notification);
    }
    println!("unread: {}", center.unread_count());

    for effect in center.mark_read(2, now) {
        println!("notification effect: {:?}", effect);
    }
    if let Some(route) = center.click_toast() {
        println!("navigate: {}", route);
    }
    center.mark_read(1, now);
    center.tick(now + config.notifications.toast_duration());
    println!("toast visible after expiry: {}", center.toast().is_visible());
    center.mark_all_read();
    println!("unread: {}", center.unread_count());

    let mut engine = SwipeDecisionEngine::new(demo_candidates(), (&config.swipe).into());
    let transform = engine.on_drag_update(60.0);
    println!(
        "drag: translate {:.1}px rotate {:.2}deg",
        transform.translate_x, transform.rotate_deg
    );
    let outcome = engine.on_drag_end_default(60.0);
    println!("drag end 60: {:?} {:?}", outcome.decision, outcome.effects);

    engine.on_drag_update(180.0);
    let outcome = engine.on_drag_end_default(180.0);
    println!("drag end 180: {:?}", outcome.decision);
    for effect in &outcome.effects {
        println!("swipe effect: {:?}", effect);
        if let SwipeEffect::MatchSucceeded { profile_id } = effect {
            println!("match dialog -> {}", open_match_chat(*profile_id));
        }
    }

    if let Some(token) = engine.pending_token() {
        println!("settle: advanced={}", engine.settle(token));
        println!("settle again: advanced={}", engine.settle(token));
    }

    engine.dislike();
    if let Some(token) = engine.pending_token() {
        engine.settle(token);
    }
    println!("profile index after wrap: {}", engine.profile_index());

    let hold = config.friends.hold_duration();
    let mut friends = FriendsList::new(demo_friends(), hold);
    friends.select(3);
    friends.hold_start(now);
    friends.hold_end();
    println!("hold released early: {:?}", friends.tick(now + hold));
    friends.hold_start(now);
    if let Some(route) = friends.tick(now + hold) {
        println!("hold: navigate {}", route);
    }
    let Some(route) = friends.open_chat(2) else {
        return;
    };
    println!("chat action: navigate {}", route);

    let friend_id = route.friend_id();
    let opened = SystemTime::now();
    let mut chat = ChatThread::new(
        friend_id,
        display_name(friends.friends(), friend_id),
        &UserProfile::default().name,
        config.chat.long_press(),
        opened,
    );
    chat.confirm_welcome(opened);
    chat.edit_draft("   ");
    println!("blank send: {:?}", chat.send(opened));
    chat.edit_draft("  커피 좋아하세요?  ");
    chat.send(opened);

    if let Some(greeting) = chat.messages().first().map(|m| m.id) {
        chat.press_start(greeting, now);
        if let Some(id) = chat.tick(now + config.chat.long_press()) {
            println!("reaction picker: message {}", id);
            chat.react(id, REACTIONS[0]);
        }
    }
    for message in chat.messages() {
        let reaction = chat.state().reaction(message.id).unwrap_or("");
        println!("{:?}: {} {}", message.sender, message.content, reaction);
    }
}
