use tokio::sync::watch;

/// Контейнер состояния экрана: снимок + канал уведомлений.
///
/// Пишет в него только контроллер-владелец, читает слой представления.
#[derive(Debug)]
pub struct Store<T> {
    sender: watch::Sender<T>,
}

impl<T: Clone> Store<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Неизменяемая копия текущего состояния.
    pub fn snapshot(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    /// Меняет состояние на месте и будит подписчиков.
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut T),
    {
        self.sender.send_modify(mutate);
    }

    /// Как `update`, но подписчики узнают об изменении, только если `mutate` вернул `true`.
    pub fn update_if<F>(&self, mutate: F) -> bool
    where
        F: FnOnce(&mut T) -> bool,
    {
        self.sender.send_if_modified(mutate)
    }

    pub fn replace(&self, value: T) {
        self.sender.send_replace(value);
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
