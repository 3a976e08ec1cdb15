use custom_collections::collections::circ::CircularQueue;
use custom_collections::collections::contiguous::{ArrayList, ArrayStack};
use custom_collections::collections::linked::DoublyLinkedList;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("[DoublyLinkedList]");

    let mut list: DoublyLinkedList<_> = [
        "apple", "banana", "cherry", "ice cream", "video games", "movies", "homework", "summer",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    info!(last = %list.get(7));
    info!(removed = %list.remove(6));
    list.push_front(String::from("1000"));

    for i in 0..list.len() {
        info!(index = i, value = %list.get(i));
    }
    match list.try_get(list.len()) {
        Ok(value) => info!(%value),
        Err(error) => info!(%error, "out of bounds access rejected"),
    }
    list.clear();

    info!("[ArrayList]");

    let mut array_list = ArrayList::new();
    array_list.push(10.5);
    array_list.push(15.0);
    for i in 0..12 {
        array_list.push(f64::from(i));
    }
    info!(len = array_list.len(), cap = array_list.cap(), first = array_list.get(0));

    info!("[ArrayStack]");

    let mut stack = ArrayStack::new();
    stack.push("apple");
    stack.push("banana");
    stack.push("cherry");
    info!(peek = stack.peek());
    info!(pop = stack.pop());
    info!(pop = stack.pop());
    info!(is_empty = stack.is_empty());

    info!("[CircularQueue]");

    let mut queue = CircularQueue::new();
    queue.enqueue("apple");
    queue.enqueue("banana");
    queue.enqueue("cherry");
    info!(peek = queue.peek());
    info!(dequeue = queue.dequeue());
    info!(dequeue = queue.dequeue());
    info!(is_empty = queue.is_empty());
}
