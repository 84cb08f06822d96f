//! Seed data - the mock dataset the repositories serve until a real
//! content provider exists.

use quill_core::domain::{Post, Role, User};

/// Build the seeded users and posts. Post author references point into the
/// returned user set.
pub fn dataset() -> (Vec<User>, Vec<Post>) {
    let users = users();
    let posts = posts(&users);
    (users, posts)
}

fn users() -> Vec<User> {
    let mut admin = User::new("Nenad Djoric", "djoricnenad@gmail.com", Role::SuperAdmin);
    admin.bio = Some("Founder and site administrator.".to_string());
    admin.avatar = Some(
        "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?w=80&h=80".to_string(),
    );

    let mut editor = User::new("Milica Petrovic", "milica@example.com", Role::Editor);
    editor.bio = Some("Editor covering culture and travel.".to_string());

    let reader = User::new("Marko Jovanovic", "marko@example.com", Role::Reader);

    // Former editor; account kept for attribution but login disabled.
    let mut inactive = User::new("Jovana Ilic", "jovana@example.com", Role::Editor);
    inactive.is_active = false;

    vec![admin, editor, reader, inactive]
}

fn posts(users: &[User]) -> Vec<Post> {
    let admin = &users[0];
    let editor = &users[1];

    let mut welcome = Post::new(
        admin.id,
        "Welcome to the Blog",
        "## A Fresh Start\n\n\
         This is the **first** post on the new site. Expect writing about\n\
         *culture*, *history*, and the occasional recipe.\n\n\
         > Every long journey begins with a single step.\n\n\
         What is coming next:\n\n\
         - Weekly essays\n\
         - Photo travelogues\n\
         - Reader questions\n\n\
         Follow along at [our archive](https://example.com/archive).",
    );
    welcome.excerpt = "The first post on the new site, and what to expect next.".to_string();
    welcome.category = "Announcements".to_string();
    welcome.tags = vec!["meta".to_string(), "welcome".to_string()];
    welcome.is_featured = true;
    welcome.featured_image =
        Some("https://images.pexels.com/photos/261763/pexels-photo-261763.jpeg".to_string());
    welcome.view_count = 412;
    welcome.published_at = Some(welcome.created_at);

    let mut travel = Post::new(
        editor.id,
        "Three Days on the Danube",
        "### Day One\n\n\
         We left before sunrise.  \n\
         The river was still asleep.\n\n\
         ![Morning on the river](https://images.pexels.com/photos/358532/pexels-photo-358532.jpeg)\n\n\
         ### Day Two\n\n\
         Markets, fortresses, and **too much** coffee.",
    );
    travel.excerpt = "A short travelogue from the river bank.".to_string();
    travel.category = "Travel".to_string();
    travel.tags = vec![
        "travel".to_string(),
        "danube".to_string(),
        "photo".to_string(),
    ];
    travel.view_count = 128;
    travel.published_at = Some(travel.created_at);

    let mut draft = Post::new(
        editor.id,
        "Notes Toward an Essay",
        "Fragments only for now.\n\n- an opening image\n- the argument\n- a closing question",
    );
    draft.excerpt = "An unpublished outline.".to_string();
    draft.category = "Essays".to_string();
    draft.tags = vec!["drafts".to_string()];

    vec![welcome, travel, draft]
}
