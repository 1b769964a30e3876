use llist::{Link, Node};

////////////////////////////////////////////////////////////////////////////////

pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Cat {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Named for Dog {
    fn name(&self) -> &str {
        &self.name
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Cat,
    Dog,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Animal {
    Cat(Cat),
    Dog(Dog),
}

impl Animal {
    pub fn species(&self) -> Species {
        match self {
            Self::Cat(_) => Species::Cat,
            Self::Dog(_) => Species::Dog,
        }
    }

    pub fn into_cat(self) -> Option<Cat> {
        match self {
            Self::Cat(cat) => Some(cat),
            Self::Dog(_) => None,
        }
    }

    pub fn into_dog(self) -> Option<Dog> {
        match self {
            Self::Dog(dog) => Some(dog),
            Self::Cat(_) => None,
        }
    }
}

impl Named for Animal {
    fn name(&self) -> &str {
        match self {
            Self::Cat(cat) => cat.name(),
            Self::Dog(dog) => dog.name(),
        }
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Self::Cat(cat)
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Self::Dog(dog)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Animals leave the shelter oldest first, optionally restricted to one
/// species.
#[derive(Debug, Default)]
pub struct Shelter {
    first: Link<Animal>,
}

impl Shelter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, animal: impl Into<Animal>) {
        *llist::tail_link(&mut self.first) = Some(Box::new(Node::new(animal.into())));
    }

    pub fn pick(&self) -> Option<&Animal> {
        self.first.as_ref().map(|node| &node.value)
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn len(&self) -> usize {
        llist::len(&self.first)
    }

    pub fn dequeue_any(&mut self) -> Option<Animal> {
        self.first.take().map(|node| {
            let Node { value, next } = *node;
            self.first = next;
            value
        })
    }

    pub fn dequeue_dog(&mut self) -> Option<Dog> {
        self.dequeue_species(Species::Dog).and_then(Animal::into_dog)
    }

    pub fn dequeue_cat(&mut self) -> Option<Cat> {
        self.dequeue_species(Species::Cat).and_then(Animal::into_cat)
    }

    /// Unlinks the oldest animal of `species`, leaving the others in order.
    fn dequeue_species(&mut self, species: Species) -> Option<Animal> {
        let mut cursor = &mut self.first;

        while let Some(node) = cursor.take() {
            if node.value.species() == species {
                let Node { value, next } = *node;
                *cursor = next;
                log::debug!("{species:?} {} left the shelter", value.name());
                return Some(value);
            }
            cursor = &mut cursor.insert(node).next;
        }

        None
    }
}

impl Drop for Shelter {
    fn drop(&mut self) {
        llist::clear(&mut self.first);
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(shelter: &mut Shelter) -> Vec<String> {
        std::iter::from_fn(|| shelter.dequeue_any())
            .map(|animal| animal.name().to_string())
            .collect()
    }

    #[test_log::test]
    fn pick_on_empty_shelter() {
        let mut shelter = Shelter::new();

        assert_eq!(shelter.pick(), None);
        assert_eq!(shelter.dequeue_any(), None);
        assert_eq!(shelter.dequeue_dog(), None);
        assert_eq!(shelter.dequeue_cat(), None);
    }

    #[test_log::test]
    fn single_animal_is_first() {
        let mut shelter = Shelter::new();
        shelter.enqueue(Cat::new("Cat1"));

        assert_eq!(shelter.pick(), Some(&Animal::Cat(Cat::new("Cat1"))));
        assert_eq!(shelter.dequeue_any(), Some(Animal::Cat(Cat::new("Cat1"))));
        assert!(shelter.is_empty());

        shelter.enqueue(Dog::new("Dog1"));
        assert_eq!(shelter.pick().map(Animal::species), Some(Species::Dog));
        assert_eq!(
            shelter.dequeue_any().map(|dog| dog.name().to_string()),
            Some("Dog1".to_string())
        );
    }

    #[test_log::test]
    fn dequeue_dog_with_only_cats() {
        let mut shelter = Shelter::new();
        shelter.enqueue(Cat::new("Cat1"));
        shelter.enqueue(Cat::new("Cat2"));

        assert_eq!(shelter.dequeue_dog(), None);
        assert_eq!(shelter.len(), 2);
    }

    #[test_log::test]
    fn dequeue_cat_with_only_dogs() {
        let mut shelter = Shelter::new();
        shelter.enqueue(Dog::new("Dog1"));

        assert_eq!(shelter.dequeue_cat(), None);
        assert_eq!(shelter.len(), 1);
    }

    #[test_log::test]
    fn dequeue_dog_keeps_order_of_others() {
        let mut shelter = Shelter::new();
        shelter.enqueue(Cat::new("Cat1"));
        shelter.enqueue(Dog::new("Dog1"));
        shelter.enqueue(Cat::new("Cat2"));

        assert_eq!(shelter.dequeue_dog(), Some(Dog::new("Dog1")));
        assert_eq!(names(&mut shelter), vec!["Cat1", "Cat2"]);
    }

    #[test_log::test]
    fn dequeue_cat_returns_oldest_cat() {
        let mut shelter = Shelter::new();
        shelter.enqueue(Dog::new("Dog1"));
        shelter.enqueue(Dog::new("Dog2"));
        shelter.enqueue(Cat::new("Cat1"));
        shelter.enqueue(Dog::new("Dog3"));
        shelter.enqueue(Cat::new("Cat2"));

        assert_eq!(shelter.dequeue_cat(), Some(Cat::new("Cat1")));
        assert_eq!(
            shelter.dequeue_cat().map(|cat| cat.name().to_string()),
            Some("Cat2".to_string())
        );
        assert_eq!(shelter.dequeue_cat(), None);
        assert_eq!(names(&mut shelter), vec!["Dog1", "Dog2", "Dog3"]);
    }
}
