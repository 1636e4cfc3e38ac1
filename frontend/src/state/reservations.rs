use std::collections::BTreeSet;

use leptos::*;

use crate::api::{ApiClient, ApiError, EntityId, Reservation};

pub const DUPLICATE_RESERVATION_MESSAGE: &str = "Ya tienes una reserva para esta clase.";
pub const RESERVATION_SUCCESS_MESSAGE: &str = "La clase ha sido reservada con éxito.";
pub const RESERVATION_BUSY_MESSAGE: &str = "Ya hay una reserva en curso.";
pub const RESERVATIONS_INCOMPLETE_MESSAGE: &str =
    "No se pudieron cargar tus reservas; la información puede estar incompleta.";

/// Class ids the current user already holds a reservation for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationSet {
    class_ids: BTreeSet<EntityId>,
}

impl ReservationSet {
    /// Reservations without a class reference carry no class id and are skipped.
    pub fn from_reservations<'a>(reservations: impl IntoIterator<Item = &'a Reservation>) -> Self {
        Self {
            class_ids: reservations
                .into_iter()
                .filter_map(Reservation::class_id)
                .collect(),
        }
    }

    pub fn can_reserve(&self, class_id: EntityId) -> bool {
        !self.class_ids.contains(&class_id)
    }

    pub fn contains(&self, class_id: EntityId) -> bool {
        self.class_ids.contains(&class_id)
    }

    pub fn len(&self) -> usize {
        self.class_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.class_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.class_ids.iter().copied()
    }
}

impl FromIterator<EntityId> for ReservationSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self {
            class_ids: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedReservations {
    pub reservations: Vec<Reservation>,
    pub set: ReservationSet,
    /// Set when the fetch failed and the set is empty by fallback.
    pub warning: Option<ApiError>,
}

impl LoadedReservations {
    pub fn from_reservations(reservations: Vec<Reservation>) -> Self {
        let set = ReservationSet::from_reservations(&reservations);
        Self {
            reservations,
            set,
            warning: None,
        }
    }
}

/// Never fails: a broken fetch degrades to an empty set plus a warning so the
/// calendar stays usable.
pub async fn load_user_reservations(api: &ApiClient, user_id: EntityId) -> LoadedReservations {
    match api.list_reservations(user_id).await {
        Ok(reservations) => LoadedReservations::from_reservations(reservations),
        Err(err) => {
            log::warn!("reservations for user {} unavailable: {}", user_id, err);
            LoadedReservations {
                warning: Some(err),
                ..LoadedReservations::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReserveOutcome {
    /// Created; carries the re-fetched reservations.
    Reserved(LoadedReservations),
    /// Already reserved locally; the backend was not contacted.
    Duplicate,
    /// Another booking is pending or the reservation set is still loading.
    Busy,
    Failed(ApiError),
}

impl ReserveOutcome {
    pub fn message(&self) -> String {
        match self {
            ReserveOutcome::Reserved(_) => RESERVATION_SUCCESS_MESSAGE.to_string(),
            ReserveOutcome::Duplicate => DUPLICATE_RESERVATION_MESSAGE.to_string(),
            ReserveOutcome::Busy => RESERVATION_BUSY_MESSAGE.to_string(),
            ReserveOutcome::Failed(err) => err.error.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ReserveOutcome::Reserved(_))
    }
}

/// Books `class_id` unless `current` already holds it. After a successful
/// create the set is re-fetched from the backend rather than patched locally.
pub async fn reserve(
    api: &ApiClient,
    current: &ReservationSet,
    user_id: EntityId,
    class_id: EntityId,
) -> ReserveOutcome {
    if !current.can_reserve(class_id) {
        log::info!("class {} already reserved by user {}", class_id, user_id);
        return ReserveOutcome::Duplicate;
    }
    match api.create_reservation(user_id, class_id).await {
        Ok(_) => ReserveOutcome::Reserved(load_user_reservations(api, user_id).await),
        Err(err) => {
            log::warn!("reservation of class {} failed: {}", class_id, err);
            ReserveOutcome::Failed(err)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationState {
    pub loaded: LoadedReservations,
    pub loading: bool,
    /// Class whose booking request is pending; one at a time.
    pub in_flight: Option<EntityId>,
    /// Bumped by every load and every successful booking; a load that
    /// finishes under an older generation is discarded.
    pub generation: u64,
}

impl ReservationState {
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Returns false when a newer load or booking already replaced the set.
    pub fn finish_load(&mut self, generation: u64, loaded: LoadedReservations) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loaded = loaded;
        self.loading = false;
        true
    }

    /// Booking waits until the set is known and no other booking is pending.
    pub fn can_book(&self) -> bool {
        !self.loading && self.in_flight.is_none()
    }

    pub fn begin_booking(&mut self, class_id: EntityId) -> bool {
        if !self.can_book() {
            return false;
        }
        self.in_flight = Some(class_id);
        true
    }

    pub fn finish_booking(&mut self, outcome: &ReserveOutcome) {
        self.in_flight = None;
        if let ReserveOutcome::Reserved(loaded) = outcome {
            self.generation += 1;
            self.loaded = loaded.clone();
            self.loading = false;
        }
    }

    pub fn is_booking(&self, class_id: EntityId) -> bool {
        self.in_flight == Some(class_id)
    }
}

/// Keeps the signed-in user's reservation set in a signal and gates booking.
/// Updates after the owning view is gone are dropped.
#[derive(Clone)]
pub struct ReservationReconciler {
    api: ApiClient,
    user_id: EntityId,
    state: RwSignal<ReservationState>,
}

impl ReservationReconciler {
    pub fn new(api: ApiClient, user_id: EntityId) -> Self {
        Self {
            api,
            user_id,
            state: create_rw_signal(ReservationState::default()),
        }
    }

    pub fn user_id(&self) -> EntityId {
        self.user_id
    }

    pub fn state(&self) -> Signal<ReservationState> {
        self.state.into()
    }

    pub fn can_reserve(&self, class_id: EntityId) -> bool {
        self.state
            .with_untracked(|state| state.loaded.set.can_reserve(class_id))
    }

    pub async fn refresh(&self) -> LoadedReservations {
        let generation = self.state.try_update(|state| state.begin_load());
        let loaded = load_user_reservations(&self.api, self.user_id).await;
        if let Some(generation) = generation {
            let applied = self
                .state
                .try_update(|state| state.finish_load(generation, loaded.clone()))
                .unwrap_or(false);
            if !applied {
                log::debug!("dropping stale reservations for user {}", self.user_id);
            }
        }
        loaded
    }

    pub async fn reserve(&self, class_id: EntityId) -> ReserveOutcome {
        let Some((current, ready)) = self
            .state
            .try_with_untracked(|state| (state.loaded.set.clone(), !state.loading))
        else {
            return ReserveOutcome::Busy;
        };
        if !ready {
            log::info!("class {} booking deferred until reservations load", class_id);
            return ReserveOutcome::Busy;
        }
        if !current.can_reserve(class_id) {
            return ReserveOutcome::Duplicate;
        }
        let started = self
            .state
            .try_update(|state| state.begin_booking(class_id))
            .unwrap_or(false);
        if !started {
            return ReserveOutcome::Busy;
        }

        let outcome = reserve(&self.api, &current, self.user_id, class_id).await;
        let _ = self
            .state
            .try_update(|state| state.finish_booking(&outcome));
        outcome
    }
}
