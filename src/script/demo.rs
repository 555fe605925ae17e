//! The built-in Finch hero demo.

use super::Event;

const CMD: Option<&str> = Some("cmd");
const BIRD: Option<&str> = Some("bird");
const RESPONSE: Option<&str> = Some("response");

/// Launch banner, a typed question, and a streamed answer.
pub(super) fn events() -> Vec<Event> {
    vec![
        Event::instant(600, "$ finch", CMD),
        Event::blank(150),
        Event::instant(80, "      \u{2584}\u{2584}\u{2584}\u{2584}\u{2584}\u{2584}", BIRD),
        Event::instant(
            40,
            "    \u{2597}\u{259f}\u{2588}\u{25cf}\u{2588}\u{2588}\u{2599}\u{25ba}  finch v0.5.2",
            BIRD,
        ),
        Event::instant(
            40,
            "  \u{258c}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{258c}  Qwen-2.5-7B \u{00b7} Metal \u{00b7} ready",
            BIRD,
        ),
        Event::instant(
            40,
            "  \u{259d}\u{259c}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{2588}\u{259b}\u{2598}  ~/repos/myproject",
            BIRD,
        ),
        Event::instant(40, "     \u{2565}  \u{2565}", BIRD),
        Event::instant(200, "    \u{2572}    \u{2571}", BIRD),
        Event::blank(300),
        Event::typed(700, "> How do I handle errors in async Rust?", CMD, Some(32)),
        Event::blank(350),
        Event::streamed(
            80,
            [
                "  Use `?` with `anyhow::Result` for clean error propagation:",
                "",
                "    async fn fetch_user(id: u64) -> anyhow::Result<User> {",
                "        let resp = client.get(url).await?;",
                "        let user = resp.json::<User>().await?;",
                "        Ok(user)",
                "    }",
                "",
                "  anyhow handles From<> conversions automatically \u{2014} no more",
                "  manual error type juggling. Add context with `.context()`:",
                "",
                "    .with_context(|| format!(\"fetching user {id}\"))?",
            ],
            RESPONSE,
        ),
        Event::blank(400),
        Event::instant(0, "> ", CMD),
    ]
}
