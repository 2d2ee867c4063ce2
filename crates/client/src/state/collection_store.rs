//! Collection store - the seven business record collections
//!
//! All collections persist together under `gcms-storage`. A store that has
//! never been saved starts with the four built-in templates; once anything
//! is persisted, the saved state wins, even if it holds no templates.

use std::sync::Arc;

use gcms_domain::{
    BidAnalysis, BidAnalysisId, BidAnalysisUpdate, CollectionKind, Milestone, MilestoneId,
    MilestoneUpdate, Opportunity, OpportunityId, OpportunityUpdate, PricingCalculation,
    PricingCalculationId, PricingCalculationUpdate, Proposal, ProposalId, ProposalUpdate, Record,
    Subcontractor, SubcontractorId, SubcontractorUpdate, Template, TemplateId, TemplateUpdate,
};
use gcms_shared::CollectionsSnapshot;

use super::collection::Collection;
use crate::infrastructure::messaging::{ChangeBus, ChangeKind, StoreEvent, StoreNamespace};
use crate::ports::outbound::SnapshotRepository;

/// Generates the accessor, lookup and add/update/remove operations for one
/// collection field. Every mutation persists and publishes, even on a miss.
macro_rules! collection_ops {
    (
        $field:ident: $record:ty, $id:ty, $update:ty;
        $find:ident, $add:ident, $update_fn:ident, $remove:ident
    ) => {
        pub fn $field(&self) -> &[$record] {
            self.$field.records()
        }

        pub fn $find(&self, id: &$id) -> Option<&$record> {
            self.$field.find(id)
        }

        pub fn $add(&mut self, record: $record) {
            let kind = <$record as Record>::KIND;
            tracing::debug!(collection = %kind, id = %record.id(), "Adding record");
            self.$field.add(record);
            self.commit(kind, ChangeKind::Added);
        }

        pub fn $update_fn(&mut self, id: &$id, update: $update) {
            let kind = <$record as Record>::KIND;
            if self.$field.update(id, &update) == 0 {
                tracing::debug!(collection = %kind, id = %id, "Update matched no record");
            }
            self.commit(kind, ChangeKind::Updated);
        }

        pub fn $remove(&mut self, id: &$id) {
            let kind = <$record as Record>::KIND;
            if self.$field.remove(id) == 0 {
                tracing::debug!(collection = %kind, id = %id, "Remove matched no record");
            }
            self.commit(kind, ChangeKind::Removed);
        }
    };
}

pub struct CollectionStore {
    opportunities: Collection<Opportunity>,
    bid_analyses: Collection<BidAnalysis>,
    templates: Collection<Template>,
    pricing_calculations: Collection<PricingCalculation>,
    milestones: Collection<Milestone>,
    subcontractors: Collection<Subcontractor>,
    proposals: Collection<Proposal>,
    hydrated: bool,
    repository: Arc<dyn SnapshotRepository<CollectionsSnapshot>>,
    bus: ChangeBus,
}

impl CollectionStore {
    /// Create a store holding the initial state (built-in templates only).
    pub fn new(repository: Arc<dyn SnapshotRepository<CollectionsSnapshot>>, bus: ChangeBus) -> Self {
        let mut store = Self {
            opportunities: Collection::new(),
            bid_analyses: Collection::new(),
            templates: Collection::new(),
            pricing_calculations: Collection::new(),
            milestones: Collection::new(),
            subcontractors: Collection::new(),
            proposals: Collection::new(),
            hydrated: false,
            repository,
            bus,
        };
        store.replace_all(CollectionsSnapshot::initial());
        store
    }

    /// Replace in-memory state with the persisted collections.
    ///
    /// Nothing saved, or a snapshot that cannot be read, falls back to the
    /// initial state. Nothing is written back until the next mutation.
    pub fn hydrate(&mut self) {
        let snapshot = match self.repository.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => CollectionsSnapshot::initial(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted collections");
                CollectionsSnapshot::initial()
            }
        };
        self.replace_all(snapshot);
        self.hydrated = true;

        tracing::debug!(
            opportunities = self.opportunities.len(),
            templates = self.templates.len(),
            "Collections hydrated"
        );
        self.bus.publish(StoreEvent::Hydrated {
            namespace: StoreNamespace::Collections,
        });
    }

    pub fn has_hydrated(&self) -> bool {
        self.hydrated
    }

    pub fn len_of(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Opportunities => self.opportunities.len(),
            CollectionKind::BidAnalyses => self.bid_analyses.len(),
            CollectionKind::Templates => self.templates.len(),
            CollectionKind::PricingCalculations => self.pricing_calculations.len(),
            CollectionKind::Milestones => self.milestones.len(),
            CollectionKind::Subcontractors => self.subcontractors.len(),
            CollectionKind::Proposals => self.proposals.len(),
        }
    }

    /// Copy of everything that gets persisted
    pub fn snapshot(&self) -> CollectionsSnapshot {
        CollectionsSnapshot {
            opportunities: self.opportunities.records().to_vec(),
            bid_analyses: self.bid_analyses.records().to_vec(),
            templates: self.templates.records().to_vec(),
            pricing_calculations: self.pricing_calculations.records().to_vec(),
            milestones: self.milestones.records().to_vec(),
            subcontractors: self.subcontractors.records().to_vec(),
            proposals: self.proposals.records().to_vec(),
        }
    }

    collection_ops!(
        opportunities: Opportunity, OpportunityId, OpportunityUpdate;
        find_opportunity, add_opportunity, update_opportunity, remove_opportunity
    );

    collection_ops!(
        bid_analyses: BidAnalysis, BidAnalysisId, BidAnalysisUpdate;
        find_bid_analysis, add_bid_analysis, update_bid_analysis, remove_bid_analysis
    );

    collection_ops!(
        templates: Template, TemplateId, TemplateUpdate;
        find_template, add_template, update_template, remove_template
    );

    collection_ops!(
        pricing_calculations: PricingCalculation, PricingCalculationId, PricingCalculationUpdate;
        find_pricing_calculation, add_pricing_calculation, update_pricing_calculation,
        remove_pricing_calculation
    );

    collection_ops!(
        milestones: Milestone, MilestoneId, MilestoneUpdate;
        find_milestone, add_milestone, update_milestone, remove_milestone
    );

    collection_ops!(
        subcontractors: Subcontractor, SubcontractorId, SubcontractorUpdate;
        find_subcontractor, add_subcontractor, update_subcontractor, remove_subcontractor
    );

    collection_ops!(
        proposals: Proposal, ProposalId, ProposalUpdate;
        find_proposal, add_proposal, update_proposal, remove_proposal
    );

    fn replace_all(&mut self, snapshot: CollectionsSnapshot) {
        self.opportunities = Collection::from_records(snapshot.opportunities);
        self.bid_analyses = Collection::from_records(snapshot.bid_analyses);
        self.templates = Collection::from_records(snapshot.templates);
        self.pricing_calculations = Collection::from_records(snapshot.pricing_calculations);
        self.milestones = Collection::from_records(snapshot.milestones);
        self.subcontractors = Collection::from_records(snapshot.subcontractors);
        self.proposals = Collection::from_records(snapshot.proposals);
    }

    fn commit(&mut self, kind: CollectionKind, change: ChangeKind) {
        if let Err(e) = self.repository.save(&self.snapshot()) {
            tracing::error!(
                error = %e,
                key = self.repository.key(),
                collection = %kind,
                "Failed to persist collections"
            );
        }

        self.bus
            .publish(StoreEvent::CollectionChanged { kind, change });
    }
}
