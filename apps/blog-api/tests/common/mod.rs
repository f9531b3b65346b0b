//! Test harness: random post generation and a seeded store that is always
//! dropped after the test body, even when an assertion fails.

#![allow(dead_code, unused_macros)]

use std::future::Future;
use std::panic::AssertUnwindSafe;

use chrono::{Duration, Utc};
use futures::FutureExt;
use rand::Rng;
use rand::seq::SliceRandom;

use blog_api::AppState;
use blog_core::domain::{Author, NewPost, Post};
use blog_core::ports::{BaseRepository, PostRepository};

pub const SEED_COUNT: usize = 10;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Grace", "Alan", "Barbara", "Edsger", "Frances", "Dennis", "Margaret", "Ken", "Radia",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Allen", "Ritchie", "Hamilton",
    "Thompson", "Perlman",
];
const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "veniam", "quis",
    "nostrud",
];

/// Build the actix test service for a state.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(blog_api::handlers::configure_routes),
        )
        .await
    };
}

fn sentence(rng: &mut impl Rng, words: usize) -> String {
    let mut text = (0..words)
        .filter_map(|_| WORDS.choose(&mut *rng).copied())
        .collect::<Vec<_>>()
        .join(" ");
    if let Some(first) = text.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    text.push('.');
    text
}

/// A random author.
pub fn random_author() -> Author {
    let mut rng = rand::thread_rng();
    Author::new(
        *FIRST_NAMES.choose(&mut rng).unwrap_or(&"Ada"),
        *LAST_NAMES.choose(&mut rng).unwrap_or(&"Lovelace"),
    )
}

/// A random, valid post dated somewhere in the past ten years.
pub fn random_post() -> NewPost {
    let author = random_author();
    let mut rng = rand::thread_rng();
    let title_words = rng.gen_range(3..8);
    let title = sentence(&mut rng, title_words);
    let paragraphs = rng.gen_range(2..5);
    let content = (0..paragraphs)
        .map(|_| sentence(&mut rng, 12))
        .collect::<Vec<_>>()
        .join(" ");
    let date = Utc::now() - Duration::days(rng.gen_range(1..3650));

    NewPost::new(title, author, content).with_date(date)
}

/// A store populated for one test.
#[derive(Clone)]
pub struct TestContext {
    pub state: AppState,
    pub seeded: Vec<Post>,
}

impl TestContext {
    pub async fn seed(state: AppState) -> Self {
        let posts = (0..SEED_COUNT).map(|_| random_post()).collect();
        let seeded = state
            .posts
            .insert_many(posts)
            .await
            .expect("seeding the post store");
        Self { state, seeded }
    }

    pub fn repo(&self) -> &dyn PostRepository {
        self.state.posts.as_ref()
    }

    /// Any post that was seeded.
    pub fn existing(&self) -> &Post {
        &self.seeded[0]
    }

    pub async fn tear_down(&self) {
        self.state
            .posts
            .drop_all()
            .await
            .expect("dropping the post store");
    }
}

/// Seed `state`, run `test`, then drop the store whatever the outcome.
pub async fn run_seeded<F, Fut>(state: AppState, test: F)
where
    F: FnOnce(TestContext) -> Fut,
    Fut: Future<Output = ()>,
{
    let ctx = TestContext::seed(state).await;
    let outcome = AssertUnwindSafe(test(ctx.clone())).catch_unwind().await;
    ctx.tear_down().await;

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
}

/// [`run_seeded`] against a fresh in-memory store.
pub async fn with_seeded_posts<F, Fut>(test: F)
where
    F: FnOnce(TestContext) -> Fut,
    Fut: Future<Output = ()>,
{
    run_seeded(AppState::in_memory(), test).await
}
