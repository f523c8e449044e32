//! Transform trait.

pub trait Transform<T> {
    /// Takes ownership of the item and returns it.
    fn transform_own(&self, item: T) -> T;
}

/// Transformer enables transform chaining, adding multiple transforms and
/// applying them in insertion order in one step.
pub struct Transformer<T>(Vec<Box<dyn Transform<T> + Sync + Send>>);

impl<T> Transformer<T> {
    pub fn add(&mut self, transform: Box<dyn Transform<T> + Sync + Send>) -> &mut Transformer<T> {
        self.0.push(transform);
        self
    }

    /// Number of chained transforms.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Transform<T> for Transformer<T> {
    fn transform_own(&self, item: T) -> T {
        self.0
            .iter()
            .fold(item, |item, transform| transform.transform_own(item))
    }
}

impl<T> Default for Transformer<T> {
    fn default() -> Self {
        Self(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::{Transform, Transformer};

    struct Upper;
    impl Transform<String> for Upper {
        fn transform_own(&self, item: String) -> String {
            item.to_uppercase()
        }
    }

    struct Exclaim;
    impl Transform<String> for Exclaim {
        fn transform_own(&self, mut item: String) -> String {
            item.push('!');
            item
        }
    }

    #[test]
    fn empty_chain() {
        let t: Transformer<String> = Transformer::default();
        assert!(t.is_empty());
        assert_eq!(t.transform_own("foo".to_string()), "foo");
    }

    #[test]
    fn chain_order() {
        let mut t = Transformer::default();
        t.add(Box::new(Exclaim)).add(Box::new(Upper));
        assert_eq!(t.len(), 2);
        assert_eq!(t.transform_own("foo".to_string()), "FOO!");
    }
}
