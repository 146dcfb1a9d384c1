//! Tests for the async bridge.
//!
//! Every `*_async` combinator accepts four shapes:
//! - resolved receiver, resolved continuation
//! - resolved receiver, pending continuation
//! - pending receiver, resolved continuation
//! - pending receiver, pending continuation
//!
//! and must agree with its synchronous counterpart in all of them.

#![cfg(feature = "async")]

use railway::prelude::*;
use rstest::rstest;
use std::future::ready;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

async fn later<T>(value: T) -> T {
    tokio::time::sleep(Duration::from_millis(1)).await;
    value
}

async fn explode_later(message: &'static str) -> Outcome<i32, String> {
    later(()).await;
    panic!("{message}");
}

fn parse(input: &str) -> Outcome<i32, String> {
    input
        .parse::<i32>()
        .map_or_else(|_| Outcome::failure(format!("not a number: {input}")), Outcome::success)
}

// =============================================================================
// Four Shapes
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_async_agrees_across_shapes() {
    let expected = parse("21").map(|x| x * 2);

    let resolved_resolved = parse("21").map_async(|x| ready(x * 2)).await;
    let resolved_pending = parse("21").map_async(|x| later(x * 2)).await;
    let pending_resolved = later(parse("21")).map_async(|x| ready(x * 2)).await;
    let pending_pending = later(parse("21")).map_async(|x| later(x * 2)).await;

    assert_eq!(resolved_resolved, expected);
    assert_eq!(resolved_pending, expected);
    assert_eq!(pending_resolved, expected);
    assert_eq!(pending_pending, expected);
}

#[rstest]
#[case("10", Outcome::success(5))]
#[case("0", Outcome::failure("division by zero".to_string()))]
#[case("x", Outcome::failure("not a number: x".to_string()))]
#[tokio::test]
async fn bind_async_agrees_with_bind(#[case] input: &str, #[case] expected: Outcome<i32, String>) {
    let divide = |x: i32| {
        if x == 0 {
            Outcome::failure("division by zero".to_string())
        } else {
            Outcome::success(50 / x)
        }
    };

    assert_eq!(parse(input).bind(divide), expected);
    assert_eq!(parse(input).bind_async(|x| ready(divide(x))).await, expected);
    assert_eq!(later(parse(input)).bind_async(|x| later(divide(x))).await, expected);
}

#[rstest]
#[tokio::test]
async fn ensure_async_with_pending_predicate() {
    let small = later(parse("3")).ensure_async(|v| later(*v > 5), "too small".to_string());
    let large = parse("8").ensure_async(|v| ready(*v > 5), "too small".to_string());
    assert_eq!(small.await, Outcome::failure("too small".to_string()));
    assert_eq!(large.await, Outcome::success(8));
}

#[rstest]
#[tokio::test]
async fn tap_async_runs_side_effect_once() {
    let seen = Arc::new(AtomicUsize::new(0));
    let recorder = Arc::clone(&seen);
    let result = later(parse("4"))
        .tap_async(move |v| {
            let v = *v;
            async move {
                recorder.store(usize::try_from(v).unwrap_or_default(), Ordering::SeqCst);
            }
        })
        .await;
    assert_eq!(result, Outcome::success(4));
    assert_eq!(seen.load(Ordering::SeqCst), 4);
}

#[rstest]
#[tokio::test]
async fn error_side_combinators() {
    let mapped = later(parse("x")).map_error_async(|e| ready(e.len())).await;
    assert_eq!(mapped, Outcome::failure("not a number: x".len()));

    let recovered = parse("x")
        .compensate_async(|_| later(Outcome::<i32, ()>::success(0)))
        .await;
    assert_eq!(recovered, Outcome::success(0));

    let logged = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&logged);
    let tapped = parse("x")
        .tap_error_async(move |_| {
            flag.store(true, Ordering::SeqCst);
            ready(())
        })
        .await;
    assert!(tapped.is_failure());
    assert!(logged.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test]
async fn match_and_finally_async() {
    let described = later(parse("7"))
        .match_async(|v| later(format!("ok {v}")), |e| ready(format!("err {e}")))
        .await;
    assert_eq!(described, "ok 7");

    let text = parse("y").finally_async(|o| ready(o.to_string())).await;
    assert_eq!(text, "Failure(not a number: y)");
}

#[rstest]
#[case("8", Outcome::success(8))]
#[case("3", Outcome::failure("3 is too small".to_string()))]
#[case("x", Outcome::failure("not a number: x".to_string()))]
#[tokio::test]
async fn ensure_with_async_builds_error_from_rejected_value(
    #[case] input: &str,
    #[case] expected: Outcome<i32, String>,
) {
    let result = later(parse(input))
        .ensure_with_async(|v| later(*v > 5), |v| ready(format!("{v} is too small")))
        .await;
    assert_eq!(result, expected);
    assert_eq!(parse(input).ensure_with(|v| *v > 5, |v| format!("{v} is too small")), expected);
}

#[rstest]
#[case("4", Outcome::success(4))]
#[case("-4", Outcome::failure("negative".to_string()))]
#[case("x", Outcome::failure("not a number: x".to_string()))]
#[tokio::test]
async fn check_async_keeps_value_or_adopts_check_failure(
    #[case] input: &str,
    #[case] expected: Outcome<i32, String>,
) {
    let non_negative = |v: &i32| {
        if *v < 0 {
            Outcome::<(), String>::failure("negative".to_string())
        } else {
            Outcome::success(())
        }
    };
    assert_eq!(later(parse(input)).check_async(|v| later(non_negative(v))).await, expected);
    assert_eq!(parse(input).check(non_negative), expected);
}

#[rstest]
#[tokio::test]
async fn map_both_async_transforms_one_side() {
    let success = later(parse("2"))
        .map_both_async(|v| ready(v * 10), |e| later(e.len()))
        .await;
    assert_eq!(success, Outcome::success(20));

    let failure = parse("x")
        .map_both_async(|v| ready(v * 10), |e| later(e.len()))
        .await;
    assert_eq!(failure, Outcome::failure("not a number: x".len()));
}

// =============================================================================
// Short-circuit on Pending Failure
// =============================================================================

#[rstest]
#[tokio::test]
async fn pending_failure_never_invokes_continuation() {
    let invoked = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&invoked);
    let result = later(parse("nope"))
        .bind_async(move |x| {
            flag.store(true, Ordering::SeqCst);
            ready(Outcome::success(x))
        })
        .await;
    assert_eq!(result, Outcome::failure("not a number: nope".to_string()));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[derive(Debug, Clone, Copy)]
enum Continuation {
    Map,
    Tap,
    Ensure,
    EnsureWith,
    Check,
    Match,
    MapSafe,
    BindSafe,
    TapSafe,
    MaybeMap,
    MaybeBind,
    MaybeTap,
    MaybeFilter,
}

/// Runs `continuation` on a pending `Failure` (or `Nothing`) and reports
/// whether the absent receiver came out unchanged. Every closure handed to
/// the combinator sets `invoked`.
async fn run_on_absent_receiver(continuation: Continuation, invoked: &AtomicBool) -> bool {
    let mark = || invoked.store(true, Ordering::SeqCst);
    let failure = || later(parse("nope"));
    let nothing = || later(Maybe::<i32>::nothing());
    let expected = Outcome::<i32, String>::failure("not a number: nope".to_string());

    match continuation {
        Continuation::Map => {
            let result = failure()
                .map_async(|x| {
                    mark();
                    ready(x)
                })
                .await;
            result == expected
        }
        Continuation::Tap => {
            let result = failure()
                .tap_async(|_| {
                    mark();
                    ready(())
                })
                .await;
            result == expected
        }
        Continuation::Ensure => {
            let result = failure()
                .ensure_async(
                    |_| {
                        mark();
                        ready(false)
                    },
                    "rejected".to_string(),
                )
                .await;
            result == expected
        }
        Continuation::EnsureWith => {
            let result = failure()
                .ensure_with_async(
                    |_| {
                        mark();
                        ready(false)
                    },
                    |_| {
                        mark();
                        ready("rejected".to_string())
                    },
                )
                .await;
            result == expected
        }
        Continuation::Check => {
            let result = failure()
                .check_async(|_| {
                    mark();
                    ready(Outcome::<(), String>::success(()))
                })
                .await;
            result == expected
        }
        Continuation::Match => {
            failure()
                .match_async(
                    |_| {
                        mark();
                        ready(false)
                    },
                    |error| ready(error == "not a number: nope"),
                )
                .await
        }
        Continuation::MapSafe => {
            let result = failure()
                .map_safe_async(
                    |x| {
                        mark();
                        ready(x)
                    },
                    |fault| {
                        mark();
                        fault.message().to_string()
                    },
                )
                .await;
            result == expected
        }
        Continuation::BindSafe => {
            let result = failure()
                .bind_safe_async(
                    |x| {
                        mark();
                        ready(Outcome::success(x))
                    },
                    |fault| {
                        mark();
                        fault.message().to_string()
                    },
                )
                .await;
            result == expected
        }
        Continuation::TapSafe => {
            let result = failure()
                .tap_safe_async(
                    |_| {
                        mark();
                        ready(())
                    },
                    |fault| {
                        mark();
                        fault.message().to_string()
                    },
                )
                .await;
            result == expected
        }
        Continuation::MaybeMap => {
            let result = nothing()
                .map_async(|x| {
                    mark();
                    ready(x)
                })
                .await;
            result.has_no_value()
        }
        Continuation::MaybeBind => {
            let result = nothing()
                .bind_async(|x| {
                    mark();
                    ready(Maybe::just(x))
                })
                .await;
            result.has_no_value()
        }
        Continuation::MaybeTap => {
            let result = nothing()
                .tap_async(|_| {
                    mark();
                    ready(())
                })
                .await;
            result.has_no_value()
        }
        Continuation::MaybeFilter => {
            let result = nothing()
                .filter_async(|_| {
                    mark();
                    ready(true)
                })
                .await;
            result.has_no_value()
        }
    }
}

#[rstest]
#[case::map(Continuation::Map)]
#[case::tap(Continuation::Tap)]
#[case::ensure(Continuation::Ensure)]
#[case::ensure_with(Continuation::EnsureWith)]
#[case::check(Continuation::Check)]
#[case::match_on_success(Continuation::Match)]
#[case::map_safe(Continuation::MapSafe)]
#[case::bind_safe(Continuation::BindSafe)]
#[case::tap_safe(Continuation::TapSafe)]
#[case::maybe_map(Continuation::MaybeMap)]
#[case::maybe_bind(Continuation::MaybeBind)]
#[case::maybe_tap(Continuation::MaybeTap)]
#[case::maybe_filter(Continuation::MaybeFilter)]
#[tokio::test]
async fn absent_pending_receiver_never_invokes_continuation(#[case] continuation: Continuation) {
    let invoked = AtomicBool::new(false);
    let unchanged = run_on_absent_receiver(continuation, &invoked).await;
    assert!(unchanged, "{continuation:?} altered the absent receiver");
    assert!(!invoked.load(Ordering::SeqCst), "{continuation:?} invoked a continuation");
}

#[rstest]
#[tokio::test]
async fn pending_continuation_chain() {
    let result = later(parse("5"))
        .map_async(|x| later(x + 1))
        .bind_async(|x| later(parse(&x.to_string())))
        .ensure_async(|x| ready(*x == 6), "mismatch".to_string())
        .await;
    assert_eq!(result, Outcome::success(6));
}

// =============================================================================
// Safe Variants
// =============================================================================

#[rstest]
#[tokio::test]
async fn map_safe_async_traps_panic_while_building_future() {
    let result = parse("1")
        .map_safe_async(
            |_| -> std::future::Ready<i32> { panic!("eager") },
            |fault| fault.message().to_string(),
        )
        .await;
    assert_eq!(result, Outcome::failure("eager".to_string()));
}

#[rstest]
#[tokio::test]
async fn bind_safe_async_traps_panic_while_polling() {
    let result = later(parse("1"))
        .bind_safe_async(
            |_| explode_later("while polling"),
            |fault| fault.message().to_string(),
        )
        .await;
    assert_eq!(result, Outcome::failure("while polling".to_string()));
}

#[rstest]
#[tokio::test]
async fn safe_async_on_failure_skips_converter() {
    let converted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&converted);
    let result = parse("z")
        .map_safe_async(
            |x| ready(x + 1),
            move |fault| {
                flag.store(true, Ordering::SeqCst);
                fault.message().to_string()
            },
        )
        .await;
    assert!(result.is_failure());
    assert!(!converted.load(Ordering::SeqCst));
}

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
#[tokio::test]
async fn maybe_async_combinators() {
    let present = later(Maybe::just(3))
        .map_async(|x| ready(x * 3))
        .filter_async(|x| later(*x > 5))
        .await;
    assert_eq!(present, Maybe::just(9));

    let absent = Maybe::<i32>::nothing()
        .or_else_async(|| later(Maybe::just(1)))
        .await;
    assert_eq!(absent, Maybe::just(1));

    let outcome = later(Maybe::<i32>::nothing()).to_outcome_async("missing").await;
    assert_eq!(outcome, Outcome::failure("missing"));
}

#[rstest]
#[tokio::test]
async fn maybe_or_family_async() {
    assert_eq!(later(Maybe::<i32>::nothing()).or_async(7).await, Maybe::just(7));
    assert_eq!(Maybe::just(1).or_async(7).await, Maybe::just(1));

    let polled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&polled);
    let kept = later(Maybe::just(1))
        .or_maybe_async(async move {
            flag.store(true, Ordering::SeqCst);
            Maybe::just(2)
        })
        .await;
    assert_eq!(kept, Maybe::just(1));
    assert!(!polled.load(Ordering::SeqCst));

    let replaced = Maybe::<i32>::nothing().or_maybe_async(later(Maybe::just(2))).await;
    assert_eq!(replaced, Maybe::just(2));
}

#[rstest]
#[tokio::test]
async fn to_outcome_with_async_builds_error_only_when_absent() {
    let built = AtomicBool::new(false);
    let present = later(Maybe::just(3))
        .to_outcome_with_async(|| {
            built.store(true, Ordering::SeqCst);
            ready("missing")
        })
        .await;
    assert_eq!(present, Outcome::success(3));
    assert!(!built.load(Ordering::SeqCst));

    let absent = Maybe::<i32>::nothing()
        .to_outcome_with_async(|| later("missing"))
        .await;
    assert_eq!(absent, Outcome::failure("missing"));
}

#[rstest]
#[tokio::test]
async fn maybe_match_async_invokes_one_branch() {
    let text = Maybe::<i32>::nothing()
        .match_async(|v| ready(v.to_string()), || later("none".to_string()))
        .await;
    assert_eq!(text, "none");

    let bound = later(Maybe::just(2))
        .bind_async(|x| ready(if x > 1 { Maybe::just(x) } else { Maybe::nothing() }))
        .finally_async(|m| ready(m.has_value()))
        .await;
    assert!(bound);
}

// =============================================================================
// Runtime Integration
// =============================================================================

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn bridged_future_is_send_for_send_inputs() {
    let handle = tokio::spawn(async {
        later(parse("12"))
            .map_async(|x| later(x * 2))
            .bind_async(|x| ready(Outcome::success(x + 1)))
            .await
    });
    let result = handle.await.unwrap_or_else(|error| panic!("task failed: {error}"));
    assert_eq!(result, Outcome::success(25));
}
