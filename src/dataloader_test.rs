// dataloader_test.rs

use super::*;
use crate::datasets::VecDataset;
use crate::samplers::{
    ImbalancedDatasetSampler, ImbalancedSamplerOptions, SamplingFactor, SequentialSampler,
};

#[test]
fn test_dataloader_sequential() {
    let data = vec![1, 2, 3, 4, 5, 6];
    let dataset = VecDataset::new(data);
    let sampler = SequentialSampler::new();
    let mut loader = DataLoader::new(dataset, 2, sampler, false, None);
    let mut batches = Vec::new();
    while let Some(batch) = loader.next() {
        let batch = batch.expect("Batch should not error");
        batches.push(batch);
    }
    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0], vec![1, 2]);
    assert_eq!(batches[1], vec![3, 4]);
    assert_eq!(batches[2], vec![5, 6]);
}

#[test]
fn test_dataloader_drop_last() {
    let data = vec![1, 2, 3, 4, 5];
    let dataset = VecDataset::new(data);
    let sampler = SequentialSampler::new();
    let mut loader = DataLoader::new(dataset, 2, sampler, true, None);

    let mut batches = Vec::new();
    while let Some(batch) = loader.next() {
        let batch = batch.expect("Batch should not error");
        batches.push(batch);
    }

    assert_eq!(batches.len(), 2); // Le dernier batch de taille 1 est ignoré
    assert_eq!(batches[0], vec![1, 2]);
    assert_eq!(batches[1], vec![3, 4]);
}

#[test]
fn test_dataloader_reset_starts_a_new_epoch() {
    let data = vec![10, 20, 30, 40];
    let dataset = VecDataset::new(data);
    let sampler = SequentialSampler::new();
    let mut loader = DataLoader::new(dataset, 2, sampler, false, None);

    assert_eq!(loader.by_ref().count(), 2);
    assert_eq!(loader.next(), None); // épuisé

    loader.reset();
    let first = loader.next().unwrap().unwrap();
    assert_eq!(first, vec![10, 20]);
}

#[test]
fn test_dataloader_over_balanced_sampler() {
    // Classes de tailles 2 et 4, sur-échantillonnées à 4 chacune.
    let data = vec![
        ("a", 0),
        ("b", 0),
        ("c", 1),
        ("d", 1),
        ("e", 1),
        ("f", 1),
    ];
    let dataset = VecDataset::new(data);
    let mut options = ImbalancedSamplerOptions::new(2);
    options.sampling_factor = Some(SamplingFactor::Interpolate(1.0));
    let sampler = ImbalancedDatasetSampler::new(&dataset, options).unwrap();
    assert_eq!(sampler.num_samples(), 8);

    let loader = DataLoader::new(dataset, 3, sampler, false, None);
    let mut items = 0;
    let mut per_class = [0usize; 2];
    for batch in loader {
        let batch = batch.expect("Batch should not error");
        for (_, label) in batch {
            per_class[label] += 1;
            items += 1;
        }
    }
    assert_eq!(items, 8);
    assert_eq!(per_class, [4, 4]); // Représentation équilibrée
}
