//! End-to-end pipeline tests
//!
//! Exercise the services and the event dispatcher against the in-memory
//! fakes: reaction idempotency, vote immutability, fan-out, and dedup.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use agora_bus::ReceivedMessage;
use agora_core::entities::{NotificationKind, Poll, PollOption, ReactionTarget};
use agora_core::events::{CommentCreated, ContentEvent, PostCreated, PostLiked};
use agora_core::traits::{PollRepository, VoteOutcome};
use agora_core::DomainError;
use agora_service::{
    EventDispatcher, NotificationService, PollService, ReactionService, ServiceContextBuilder,
    ServiceError,
};
use integration_tests::{FailingPublisher, TestContext};

// ============================================================================
// Reactions
// ============================================================================

#[tokio::test]
async fn test_react_is_idempotent() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);
    let target = ReactionTarget::Post(post);

    let service = ReactionService::new(&t.ctx);
    assert_eq!(service.react(fan, target, true).await.unwrap(), 1);
    assert_eq!(service.react(fan, target, true).await.unwrap(), 1);

    // Exactly one event despite two calls
    assert_eq!(t.publisher.published().len(), 1);
}

#[tokio::test]
async fn test_concurrent_reacts_insert_exactly_one() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);
    let target = ReactionTarget::Post(post);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ctx = t.ctx.clone();
        handles.push(tokio::spawn(async move {
            ReactionService::new(&ctx).react(fan, target, true).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let counts = ReactionService::new(&t.ctx)
        .counts(target, Some(fan))
        .await
        .unwrap();
    assert_eq!(counts.likes, 1);
    assert_eq!(t.publisher.published().len(), 1);
}

#[tokio::test]
async fn test_react_does_not_flip() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);
    let target = ReactionTarget::Post(post);

    let service = ReactionService::new(&t.ctx);
    service.react(fan, target, true).await.unwrap();

    // Disliking afterwards is a no-op, not a flip
    assert_eq!(service.react(fan, target, false).await.unwrap(), 0);
    assert!(service.is_liked(fan, target).await.unwrap());

    let counts = service.counts(target, Some(fan)).await.unwrap();
    assert_eq!(counts.likes, 1);
    assert_eq!(counts.dislikes, 0);
    assert_eq!(counts.user_reaction, Some(true));
}

#[tokio::test]
async fn test_unreact_then_opposite_reaction() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);
    let comment = t.add_comment(post, author);
    let target = ReactionTarget::Comment(comment);

    let service = ReactionService::new(&t.ctx);
    service.react(fan, target, true).await.unwrap();
    assert!(service.unreact(fan, target).await.unwrap());
    assert!(!service.unreact(fan, target).await.unwrap());

    assert_eq!(service.react(fan, target, false).await.unwrap(), 1);
    let counts = service.counts(target, Some(fan)).await.unwrap();
    assert_eq!(counts.likes, 0);
    assert_eq!(counts.dislikes, 1);
}

#[tokio::test]
async fn test_like_event_carries_owner() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);

    ReactionService::new(&t.ctx)
        .react(fan, ReactionTarget::Post(post), true)
        .await
        .unwrap();

    let events = t.publisher.published();
    assert_eq!(events.len(), 1);
    match &events[0] {
        ContentEvent::PostLiked(e) => {
            assert_eq!(e.actor_id, fan);
            assert_eq!(e.post_id, post);
            assert_eq!(e.target_user_id, author);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn test_dislike_publishes_nothing() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);

    ReactionService::new(&t.ctx)
        .react(fan, ReactionTarget::Post(post), false)
        .await
        .unwrap();

    assert!(t.publisher.published().is_empty());
}

#[tokio::test]
async fn test_react_survives_bus_outage() {
    // Same wiring, but the publisher always fails
    let t = TestContext::new();
    let ctx = ServiceContextBuilder::new()
        .reaction_repo(t.reactions.clone())
        .poll_repo(t.polls.clone())
        .notification_repo(t.notifications.clone())
        .user_directory(Arc::new(integration_tests::MemoryUserDirectory::new(
            t.world.clone(),
        )))
        .content_lookup(Arc::new(integration_tests::MemoryContentLookup::new(
            t.world.clone(),
        )))
        .publisher(Arc::new(FailingPublisher))
        .build()
        .unwrap();

    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);

    // The reaction is durable even though the event went nowhere
    let count = ReactionService::new(&ctx)
        .react(fan, ReactionTarget::Post(post), true)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

// ============================================================================
// Polls
// ============================================================================

fn create_poll_request(post_id: Uuid) -> agora_service::dto::CreatePollRequest {
    agora_service::dto::CreatePollRequest {
        post_id,
        question: "Best option?".to_string(),
        options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        expires_at: Utc::now() + Duration::hours(1),
    }
}

#[tokio::test]
async fn test_create_poll_and_get() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let post = t.add_post(author);

    let service = PollService::new(&t.ctx);
    let created = service.create_poll(create_poll_request(post)).await.unwrap();
    assert_eq!(created.options.len(), 3);
    assert!(created.is_open);
    assert_eq!(created.total_votes, 0);

    let fetched = service.get_poll(post, None).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.options[0].text, "a");
    assert_eq!(fetched.options[2].position, 2);
}

#[tokio::test]
async fn test_create_poll_validation() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let post = t.add_post(author);
    let service = PollService::new(&t.ctx);

    let mut single = create_poll_request(post);
    single.options.truncate(1);
    assert!(matches!(
        service.create_poll(single).await.unwrap_err(),
        ServiceError::Validation(_)
    ));

    let mut expired = create_poll_request(post);
    expired.expires_at = Utc::now() - Duration::minutes(1);
    assert!(matches!(
        service.create_poll(expired).await.unwrap_err(),
        ServiceError::Validation(_)
    ));

    // Second poll on the same post conflicts
    service.create_poll(create_poll_request(post)).await.unwrap();
    assert!(matches!(
        service.create_poll(create_poll_request(post)).await.unwrap_err(),
        ServiceError::Conflict(_)
    ));
}

#[tokio::test]
async fn test_vote_is_immutable() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let voter = t.add_user("voter");
    let post = t.add_post(author);

    let service = PollService::new(&t.ctx);
    let poll = service.create_poll(create_poll_request(post)).await.unwrap();
    let first_option = poll.options[0].id;
    let second_option = poll.options[1].id;

    assert_eq!(
        service.vote(poll.id, first_option, voter).await.unwrap(),
        VoteOutcome::Recorded
    );
    assert_eq!(
        service.vote(poll.id, first_option, voter).await.unwrap(),
        VoteOutcome::Unchanged
    );

    let err = service.vote(poll.id, second_option, voter).await.unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert_eq!(err.error_code(), "ALREADY_VOTED");

    // Counter and vote rows agree
    let fetched = service.get_poll(post, Some(voter)).await.unwrap();
    assert_eq!(fetched.total_votes, 1);
    assert_eq!(fetched.options[0].votes_count, 1);
    assert_eq!(fetched.options[1].votes_count, 0);
    assert_eq!(fetched.user_vote, Some(first_option));
}

#[tokio::test]
async fn test_vote_counter_matches_vote_rows() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let post = t.add_post(author);

    let service = PollService::new(&t.ctx);
    let poll = service.create_poll(create_poll_request(post)).await.unwrap();

    for i in 0..5 {
        let voter = t.add_user(&format!("voter{i}"));
        let option = poll.options[i % 3].id;
        assert_eq!(
            service.vote(poll.id, option, voter).await.unwrap(),
            VoteOutcome::Recorded
        );
    }

    let fetched = service.get_poll(post, None).await.unwrap();
    let counter_sum: i32 = fetched.options.iter().map(|o| o.votes_count).sum();
    assert_eq!(i64::from(counter_sum), fetched.total_votes);
    assert_eq!(fetched.total_votes, 5);
}

#[tokio::test]
async fn test_closed_poll_rejects_votes() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let voter = t.add_user("voter");
    let post = t.add_post(author);

    // Seed an already-expired poll directly through the repository
    let poll = Poll::new(
        post,
        "Too late?".to_string(),
        Utc::now() - Duration::minutes(1),
    );
    let option = PollOption::new(poll.id, "only".to_string(), 0);
    t.polls
        .create(&poll, std::slice::from_ref(&option))
        .await
        .unwrap();

    let err = PollService::new(&t.ctx)
        .vote(poll.id, option.id, voter)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::PollClosed(_))
    ));
}

#[tokio::test]
async fn test_vote_on_missing_poll() {
    let t = TestContext::new();
    let voter = t.add_user("voter");

    let err = PollService::new(&t.ctx)
        .vote(Uuid::new_v4(), Uuid::new_v4(), voter)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

// ============================================================================
// Dispatcher and notifications
// ============================================================================

#[tokio::test]
async fn test_event_produces_exactly_one_notification() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let fan = t.add_user("fan");
    let post = t.add_post(author);

    let event = ContentEvent::PostLiked(PostLiked {
        actor_id: fan,
        post_id: post,
        target_user_id: author,
    });

    let dispatcher = EventDispatcher::new(t.ctx.clone());
    assert!(dispatcher.handle_event(&event).await.unwrap());

    // Redelivery is a no-op
    assert!(!dispatcher.handle_event(&event).await.unwrap());

    let saved = t.notifications.all();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].user_id, author);
    assert_eq!(saved[0].actor_id, fan);
    assert_eq!(saved[0].actor_username, "fan");
    assert_eq!(saved[0].kind, NotificationKind::PostLike);
    assert_eq!(saved[0].message, "Your post got a new like!");
    assert!(!saved[0].is_read);
}

#[tokio::test]
async fn test_comment_event_carries_both_ids() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let commenter = t.add_user("commenter");
    let post = t.add_post(author);
    let comment = t.add_comment(post, commenter);

    let event = ContentEvent::CommentCreated(CommentCreated {
        comment_id: comment,
        post_id: post,
        actor_id: commenter,
        target_user_id: author,
        content: "nice post".to_string(),
    });

    EventDispatcher::new(t.ctx.clone())
        .handle_event(&event)
        .await
        .unwrap();

    let saved = t.notifications.all();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].post_id, Some(post));
    assert_eq!(saved[0].comment_id, Some(comment));
    assert_eq!(saved[0].kind, NotificationKind::Comment);
    assert_eq!(saved[0].metadata["content"], "nice post");
}

#[tokio::test]
async fn test_event_for_unknown_recipient_fails() {
    let t = TestContext::new();
    let fan = t.add_user("fan");
    let post = t.add_post(fan);

    let event = ContentEvent::PostLiked(PostLiked {
        actor_id: fan,
        post_id: post,
        target_user_id: Uuid::new_v4(),
    });

    let err = EventDispatcher::new(t.ctx.clone())
        .handle_event(&event)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_USER");
    assert!(t.notifications.all().is_empty());
}

#[tokio::test]
async fn test_dispatcher_run_loop_skips_bad_messages() {
    let t = TestContext::new();
    let author = t.add_user("author");
    let post = t.add_post(author);

    let event = ContentEvent::PostCreated(PostCreated {
        post_id: post,
        author_id: author,
        title: "Hello".to_string(),
    });
    let payload = event.encode().unwrap();

    let (tx, rx) = broadcast::channel(16);
    let dispatcher = EventDispatcher::new(t.ctx.clone());
    let task = tokio::spawn(async move { dispatcher.run(rx).await });

    // Garbage first, then a valid message
    tx.send(ReceivedMessage {
        subject: Some(agora_core::Subject::PostCreated),
        event: None,
        payload: b"garbage".to_vec(),
    })
    .unwrap();
    tx.send(ReceivedMessage {
        subject: Some(agora_core::Subject::PostCreated),
        event: Some(event),
        payload,
    })
    .unwrap();

    drop(tx);
    task.await.unwrap();

    let saved = t.notifications.all();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].kind, NotificationKind::NewPost);
    assert_eq!(saved[0].message, "A new post was created: Hello");
}

#[tokio::test]
async fn test_notification_feed_pagination() {
    let t = TestContext::new();
    let recipient = t.add_user("recipient");
    let dispatcher = EventDispatcher::new(t.ctx.clone());

    for i in 0..5 {
        let actor = t.add_user(&format!("actor{i}"));
        let post = t.add_post(recipient);
        dispatcher
            .handle_event(&ContentEvent::PostLiked(PostLiked {
                actor_id: actor,
                post_id: post,
                target_user_id: recipient,
            }))
            .await
            .unwrap();
    }

    let service = NotificationService::new(&t.ctx);
    let first = service.get_notifications(recipient, 1, 2).await.unwrap();
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.total, 5);
    assert!(first.has_more);

    let last = service.get_notifications(recipient, 3, 2).await.unwrap();
    assert_eq!(last.data.len(), 1);
    assert!(!last.has_more);

    // Limit is clamped, page floors at 1
    let clamped = service.get_notifications(recipient, 0, 1000).await.unwrap();
    assert_eq!(clamped.page, 1);
    assert_eq!(clamped.limit, 100);
}

// ============================================================================
// End to end
// ============================================================================

async fn drain_through_dispatcher(t: &TestContext) {
    let dispatcher = EventDispatcher::new(t.ctx.clone());
    for event in t.publisher.published() {
        dispatcher.handle_event(&event).await.unwrap();
    }
}

#[tokio::test]
async fn test_like_to_feed_end_to_end() {
    let t = TestContext::new();
    let author = t.add_user("alice");
    let fan = t.add_user("bob");
    let post = t.add_post(author);

    // Write path publishes, dispatcher consumes
    ReactionService::new(&t.ctx)
        .react(fan, ReactionTarget::Post(post), true)
        .await
        .unwrap();
    drain_through_dispatcher(&t).await;

    // Replay the same events: nothing new lands
    drain_through_dispatcher(&t).await;

    let feed = NotificationService::new(&t.ctx)
        .get_notifications(author, 1, 20)
        .await
        .unwrap();
    assert_eq!(feed.total, 1);
    assert_eq!(feed.data[0].message, "Your post got a new like!");
    assert_eq!(feed.data[0].actor_username, "bob");
    assert_eq!(feed.data[0].post_id, Some(post));
}

#[tokio::test]
async fn test_comment_like_to_feed_end_to_end() {
    let t = TestContext::new();
    let author = t.add_user("alice");
    let commenter = t.add_user("carol");
    let fan = t.add_user("bob");
    let post = t.add_post(author);
    let comment = t.add_comment(post, commenter);

    ReactionService::new(&t.ctx)
        .react(fan, ReactionTarget::Comment(comment), true)
        .await
        .unwrap();
    drain_through_dispatcher(&t).await;

    // The comment author gets the notification, not the post author
    let feed = NotificationService::new(&t.ctx)
        .get_notifications(commenter, 1, 20)
        .await
        .unwrap();
    assert_eq!(feed.total, 1);
    assert_eq!(feed.data[0].message, "Your comment got a new like!");
    assert_eq!(feed.data[0].comment_id, Some(comment));

    let author_feed = NotificationService::new(&t.ctx)
        .get_notifications(author, 1, 20)
        .await
        .unwrap();
    assert_eq!(author_feed.total, 0);
}
