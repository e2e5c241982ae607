//! Resettable cursor over a fixed list of friends.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub name: String,
}

impl Friend {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Cursor that can be rewound to the first friend.
///
/// # Example
///
/// ```rust
/// use patterns::composition::{Friend, MyFriends};
///
/// let mut friends = MyFriends::new(vec![Friend::new("Tony"), Friend::new("Tom")]);
/// let names: Vec<_> = friends.by_ref().map(|f| f.name).collect();
/// assert_eq!(names, vec!["Tony", "Tom"]);
///
/// friends.reset();
/// assert!(friends.has_next());
/// ```
#[derive(Clone, Debug)]
pub struct MyFriends {
    friends: Vec<Friend>,
    position: usize,
}

impl MyFriends {
    pub fn new(friends: Vec<Friend>) -> Self {
        Self {
            friends,
            position: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.position < self.friends.len()
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl Iterator for MyFriends {
    type Item = Friend;

    fn next(&mut self) -> Option<Friend> {
        let friend = self.friends.get(self.position)?.clone();
        self.position += 1;
        Some(friend)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.friends.len() - self.position;
        (remaining, Some(remaining))
    }
}
