//! Seed data shown by the page until real services exist.
use crate::models::alternative::SustainableAlternative;
use crate::models::analyzed_item::AnalyzedItem;
use crate::models::community_post::{CommunityPost, PostAuthor};

/// Fixed result returned by the mock analyzer for every URL.
pub fn mock_analysis() -> AnalyzedItem {
    AnalyzedItem {
        name: "Casual Cotton T-Shirt".into(),
        brand: "H&M".into(),
        price: 799,
        image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop".into(),
        category: "T-Shirt".into(),
        style: "Casual".into(),
        color: "White".into(),
        material: "Cotton Blend".into(),
        co2_footprint: 20.0,
    }
}

pub fn seeded_alternatives() -> Vec<SustainableAlternative> {
    vec![
        SustainableAlternative {
            id: "1".into(),
            name: "Organic Cotton Basic Tee".into(),
            brand: "FabIndia".into(),
            price: 899,
            original_price: Some(1299),
            image: "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop".into(),
            eco_rating: 4.5,
            categories: vec!["Organic".into(), "Local".into(), "Fair Trade".into()],
            location: Some("Mumbai, India".into()),
            is_local: true,
            url: "#".into(),
        },
        SustainableAlternative {
            id: "2".into(),
            name: "Sustainable Hemp T-Shirt".into(),
            brand: "Doodlage".into(),
            price: 1200,
            original_price: Some(1500),
            image: "https://images.unsplash.com/photo-1576566588028-4147f3842f27?w=400&h=400&fit=crop".into(),
            eco_rating: 4.8,
            categories: vec!["Hemp".into(), "Upcycled".into(), "Zero Waste".into()],
            location: Some("Gurgaon, India".into()),
            is_local: true,
            url: "#".into(),
        },
        SustainableAlternative {
            id: "3".into(),
            name: "Vintage Cotton Tee - Thrifted".into(),
            brand: "Thrift Store Find".into(),
            price: 350,
            original_price: Some(799),
            image: "https://images.unsplash.com/photo-1583743814966-8936f37f179b?w=400&h=400&fit=crop".into(),
            eco_rating: 5.0,
            categories: vec!["Thrift".into(), "Vintage".into(), "Pre-loved".into()],
            location: Some("Sarojini Nagar, Delhi".into()),
            is_local: true,
            url: "#".into(),
        },
    ]
}

pub fn seeded_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "1".into(),
            user: PostAuthor {
                name: "Priya Sharma".into(),
                avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b601?w=40&h=40&fit=crop&crop=face".into(),
                is_verified: true,
            },
            image: "https://images.unsplash.com/photo-1434389677669-e08b4cac3105?w=300&h=300&fit=crop".into(),
            title: "Amazing organic cotton dress from FabIndia".into(),
            description: "Found this beautiful handloom dress at FabIndia Mumbai. Perfect for office wear and so comfortable!".into(),
            brand: "FabIndia".into(),
            price: 2499,
            eco_rating: 4.5,
            tags: vec!["Organic".into(), "Handloom".into(), "Local".into()],
            likes: 34,
            comments: 8,
            is_liked: false,
            time_ago: "2h ago".into(),
        },
        CommunityPost {
            id: "2".into(),
            user: PostAuthor {
                name: "Rahul Gupta".into(),
                avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=40&h=40&fit=crop&crop=face".into(),
                is_verified: false,
            },
            image: "https://images.unsplash.com/photo-1556905055-8f358a7a47b2?w=300&h=300&fit=crop".into(),
            title: "Thrifted this vintage jacket for ₹500!".into(),
            description: "Check out this amazing find from Sarojini Nagar market. Vintage leather jacket in perfect condition.".into(),
            brand: "Vintage Find".into(),
            price: 500,
            eco_rating: 5.0,
            tags: vec!["Thrift".into(), "Vintage".into(), "Delhi".into()],
            likes: 67,
            comments: 15,
            is_liked: true,
            time_ago: "1d ago".into(),
        },
    ]
}
