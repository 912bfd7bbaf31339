//! The storefront's product list.

use crate::types::Product;

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        title: "Elegant maxi women skirt trapezoidal pattern full length",
        description: "Stunning trapeze-shaped formal skirt, a true expression of elegance and chic.",
        details: "Timeless trapeze silhouette for festive occasions. High-waist fit designed to \
                  complement a wide range of body shapes, in a smooth, stretchable fabric with a \
                  luxurious finish.",
        price: 2000.0,
        currency: "INR",
        image: "/img/skirt1.jpg",
        gallery_images: &["/img/skirt1-2.jpg", "/img/skirt1.jpg"],
        colors: &[],
    },
    Product {
        id: 2,
        title: "Black dress with pink and purple ombre gradient skirt",
        description: "Stunning black dress with vibrant pink and purple ombre gradient skirt.",
        details: "Off-shoulder black dress whose skirt fades from vibrant pink to purple. Suits \
                  both casual and formal occasions.",
        price: 2000.0,
        currency: "INR",
        image: "/img/skirt2.jpg",
        gallery_images: &[
            "/img/skirt2.jpg",
            "/img/skirt2-2.jpg",
            "/img/skirt2-3.jpg",
        ],
        colors: &["#111827", "#F43F5E", "#7C3AED"],
    },
    Product {
        id: 3,
        title: "White off-shoulder dress with grey ombre gradient midi skirt",
        description: "Elegant white off-shoulder dress with grey ombre gradient midi skirt.",
        details: "Soft ombre midi skirt paired with an off-shoulder bodice, made from \
                  high-quality materials for all-day comfort.",
        price: 2000.0,
        currency: "INR",
        image: "/img/skirt3.jpg",
        gallery_images: &[
            "/img/skirt3.jpg",
            "/img/skirt3-1.jpg",
            "/img/skirt3-2.jpg",
            "/img/skirt3-4.jpg",
            "/img/skirt3-5.jpg",
        ],
        colors: &["#F59E0B", "#10B981", "#EF4444"],
    },
    Product {
        id: 4,
        title: "Luxury black and white satin skirt with pearl embellishments",
        description: "Luxury black and white satin skirt with pearl embellishments for every occasion.",
        details: "Bi-color A-line midi skirt with a diagonal seam from satin black into flowing \
                  white, finished with scattered pearl accents. Formal occasions, weddings, galas, \
                  or stylish semi-formal wear.",
        price: 2000.0,
        currency: "INR",
        image: "/img/skirt4.jpg",
        gallery_images: &[
            "/img/skirt4.jpg",
            "/img/skirt4-1.jpg",
            "/img/skirt4-2.jpg",
            "/img/skirt4-3.jpg",
            "/img/skirt4-4.jpg",
        ],
        colors: &[],
    },
    Product {
        id: 5,
        title: "Traditional burgundy ethnic outfit with intricate embroidery",
        description: "Traditional burgundy ethnic outfit with intricate embroidery.",
        details: "Deep burgundy two-piece with intricate embroidery across the bodice and skirt, \
                  cut for festive and ceremonial wear.",
        price: 2000.0,
        currency: "INR",
        image: "/img/skirt5.jpg",
        gallery_images: &[
            "/img/skirt5.jpg",
            "/img/skirt5-1.jpg",
            "/img/skirt5-2.jpg",
            "/img/skirt5-3.jpg",
        ],
        colors: &["#BE185D", "#F43F5E", "#06B6D4"],
    },
];

pub fn product_by_id(id: u32) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_unique() {
        let mut ids: Vec<u32> = PRODUCTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(product_by_id(4).unwrap().id, 4);
        assert!(product_by_id(99).is_none());
    }
}
