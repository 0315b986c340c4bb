use record_actor::{RecordError, ResourceActor, ResourceClient, StoredRecord};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: String,
    holder: String,
    seat: u32,
}

#[derive(Debug)]
struct TicketCreate {
    holder: String,
    seat: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("seat {0} does not exist")]
struct NoSuchSeat(u32);

impl StoredRecord for Ticket {
    type Id = String;
    type Create = TicketCreate;
    type Error = NoSuchSeat;

    fn from_create_params(id: String, params: TicketCreate) -> Result<Self, NoSuchSeat> {
        if params.seat == 0 {
            return Err(NoSuchSeat(params.seat));
        }
        Ok(Self {
            id,
            holder: params.holder,
            seat: params.seat,
        })
    }

    fn owner(&self) -> Option<&str> {
        Some(&self.holder)
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.seat.to_string())
    }
}

fn spawn_tickets() -> ResourceClient<Ticket> {
    let mut next = 0u32;
    let (actor, client) = ResourceActor::<Ticket>::new(10, move || {
        next += 1;
        format!("t{next}")
    });
    tokio::spawn(actor.run());
    client
}

fn ticket(holder: &str, seat: u32) -> TicketCreate {
    TicketCreate {
        holder: holder.to_string(),
        seat,
    }
}

#[tokio::test]
async fn test_create_get_delete() {
    let client = spawn_tickets();

    let id = client.create(ticket("ann", 4)).await.unwrap();
    assert_eq!(id, "t1");

    let stored = client.get(id.clone()).await.unwrap().unwrap();
    assert_eq!(stored.seat, 4);
    assert_eq!(stored.holder, "ann");

    client.delete(id.clone()).await.unwrap();
    assert!(client.get(id.clone()).await.unwrap().is_none());

    let again = client.delete(id).await;
    assert!(matches!(again, Err(RecordError::NotFound(missing)) if missing == "t1"));
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let client = spawn_tickets();

    for seat in 1..=12 {
        client.create(ticket("ann", seat)).await.unwrap();
    }
    client.delete("t3".to_string()).await.unwrap();

    let seats: Vec<u32> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.seat)
        .collect();
    assert_eq!(seats, vec![1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(client.count().await.unwrap(), 11);
}

#[tokio::test]
async fn test_list_owned_by_and_find() {
    let client = spawn_tickets();

    client.create(ticket("ann", 1)).await.unwrap();
    client.create(ticket("bob", 2)).await.unwrap();
    client.create(ticket("ann", 3)).await.unwrap();

    let anns = client.list_owned_by("ann").await.unwrap();
    assert_eq!(anns.iter().map(|t| t.seat).collect::<Vec<_>>(), vec![1, 3]);

    assert!(client.list_owned_by("carol").await.unwrap().is_empty());

    let high = client.find(|t: &Ticket| t.seat > 1).await.unwrap();
    assert_eq!(high.len(), 2);
}

#[tokio::test]
async fn test_rejected_create_stores_nothing() {
    let client = spawn_tickets();

    let result = client.create(ticket("ann", 0)).await;
    match result {
        Err(RecordError::Rejected(e)) => assert_eq!(e.to_string(), "seat 0 does not exist"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(client.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_taken_seat_is_refused_until_freed() {
    let client = spawn_tickets();

    let first = client.create(ticket("ann", 7)).await.unwrap();
    let taken = client.create(ticket("bob", 7)).await;
    assert!(matches!(taken, Err(RecordError::Duplicate(ref key)) if key == "7"));
    assert_eq!(client.count().await.unwrap(), 1);

    client.delete(first).await.unwrap();
    let id = client.create(ticket("bob", 7)).await.unwrap();
    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.holder, "bob");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_of_one_key_store_one_record() {
    let client = spawn_tickets();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.create(ticket(&format!("holder{i}"), 3)).await })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(RecordError::Duplicate(key)) => assert_eq!(key, "3"),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(client.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = ResourceActor::<Ticket>::new(1, || "t".to_string());
    drop(actor);

    assert!(client.is_closed());
    assert!(matches!(client.list().await, Err(RecordError::ActorClosed)));
}
