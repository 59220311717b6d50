//! Static storefront data: the sports-ball catalog and the vendor table.
//!
//! These are fixed inputs loaded once at startup.

use crate::catalog::{Catalog, Product, VendorInventory, VendorTable};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

fn pexels(path: &str) -> String {
    format!("https://images.pexels.com/photos/{path}?auto=compress&cs=tinysrgb&w=400")
}

/// The twenty products of the storefront, in display order.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            "توپ بسکتبال حرفه‌ای",
            "توپ بسکتبال چرمی با کیفیت بالا برای بازی‌های حرفه‌ای",
            "بسکتبال",
            Money::toman(2_990_000),
        )
        .with_original_price(Money::toman(3_500_000))
        .with_rating(4.5, 24)
        .with_image(pexels("1752757/pexels-photo-1752757.jpeg")),
        Product::new(
            "2",
            "توپ فوتبال المپیک",
            "توپ فوتبال تایید شده فیفا برای مسابقات رقابتی",
            "فوتبال",
            Money::toman(2_740_000),
        )
        .with_rating(4.8, 45)
        .with_image(pexels("274422/pexels-photo-274422.jpeg")),
        Product::new(
            "3",
            "مجموعه توپ تنیس",
            "توپ‌های تنیس حرفه‌ای - بسته ۶ عددی",
            "تنیس",
            Money::toman(590_000),
        )
        .with_rating(4.2, 18)
        .with_image(pexels("209977/pexels-photo-209977.jpeg")),
        Product::new(
            "4",
            "توپ والیبال پرو",
            "توپ والیبال درجه مسابقات با گریپ عالی",
            "والیبال",
            Money::toman(1_650_000),
        )
        .with_rating(4.6, 32)
        .with_image(pexels("863988/pexels-photo-863988.jpeg")),
        Product::new(
            "5",
            "توپ راگبی نخبه",
            "توپ راگبی پریمیوم برای تمرینات حرفه‌ای",
            "راگبی",
            Money::toman(1_850_000),
        )
        .with_original_price(Money::toman(2_200_000))
        .with_rating(4.4, 28)
        .with_image(pexels("3618162/pexels-photo-3618162.jpeg")),
        Product::new(
            "6",
            "توپ بیسبال رسمی",
            "توپ بیسبال استاندارد MLB با دوخت اصیل",
            "بیسبال",
            Money::toman(890_000),
        )
        .with_rating(4.7, 41)
        .with_image(pexels("163487/baseball-color-game-ball-163487.jpeg")),
        Product::new(
            "7",
            "مجموعه توپ گلف",
            "توپ‌های گلف پریمیوم - بسته ۱۲ عددی",
            "گلف",
            Money::toman(1_250_000),
        )
        .with_rating(4.3, 22)
        .with_image(pexels("54122/pexels-photo-54122.jpeg")),
        Product::new(
            "8",
            "مجموعه توپ پینگ پنگ",
            "توپ‌های تنیس روی میز کیفیت مسابقات - بسته ۱۲ عددی",
            "تنیس روی میز",
            Money::toman(350_000),
        )
        .with_rating(4.1, 15)
        .with_image(pexels("976873/pexels-photo-976873.jpeg")),
        Product::new(
            "9",
            "توپ فوتبال تمرینی",
            "توپ فوتبال مقاوم برای تمرین در تمام شرایط آب و هوایی",
            "فوتبال",
            Money::toman(1_450_000),
        )
        .with_rating(4.5, 36)
        .with_image(pexels("46798/the-ball-stadion-football-the-pitch-46798.jpeg")),
        Product::new(
            "10",
            "توپ هندبال مسابقات",
            "توپ هندبال سایز رسمی برای مسابقات سالن",
            "هندبال",
            Money::toman(950_000),
        )
        .with_rating(4.0, 19)
        .with_image(pexels("1263426/pexels-photo-1263426.jpeg")),
        Product::new(
            "11",
            "توپ کریکت قرمز",
            "توپ کریکت قرمز سنتی برای مسابقات تست",
            "کریکت",
            Money::toman(780_000),
        )
        .with_rating(4.6, 25)
        .with_image(pexels("1661950/pexels-photo-1661950.jpeg")),
        Product::new(
            "12",
            "توپ طبی ۸ کیلوگرمی",
            "توپ طبی مقاوم برای تمرینات قدرتی",
            "تناسب اندام",
            Money::toman(1_950_000),
        )
        .with_original_price(Money::toman(2_450_000))
        .with_rating(4.8, 52)
        .with_image(pexels("4162449/pexels-photo-4162449.jpeg")),
        Product::new(
            "13",
            "توپ بولینگ حرفه‌ای",
            "توپ بولینگ حرفه‌ای با گریپ سفارشی",
            "بولینگ",
            Money::toman(3_850_000),
        )
        .with_rating(4.4, 31)
        .with_image(pexels("3618162/pexels-photo-3618162.jpeg")),
        Product::new(
            "14",
            "توپ والیبال ساحلی",
            "توپ والیبال رسمی ساحلی برای بازی در فضای باز",
            "ورزش‌های ساحلی",
            Money::toman(1_350_000),
        )
        .with_rating(4.3, 27)
        .with_image(pexels("863988/pexels-photo-863988.jpeg")),
        Product::new(
            "15",
            "توپ واترپلو",
            "توپ ضد آب طراحی شده برای واترپلو",
            "ورزش‌های آبی",
            Money::toman(1_650_000),
        )
        .with_rating(4.2, 16)
        .with_image(pexels("274422/pexels-photo-274422.jpeg")),
        Product::new(
            "16",
            "توپ ورزشی ۶۵ سانتی",
            "توپ ورزشی ضد انفجار برای یوگا و تناسب اندام",
            "تناسب اندام",
            Money::toman(890_000),
        )
        .with_rating(4.7, 43)
        .with_image(pexels("4162449/pexels-photo-4162449.jpeg")),
        Product::new(
            "17",
            "مجموعه توپ لاکراس",
            "توپ‌های لاکراس رسمی - بسته ۳ عددی",
            "لاکراس",
            Money::toman(450_000),
        )
        .with_rating(4.1, 14)
        .with_image(pexels("209977/pexels-photo-209977.jpeg")),
        Product::new(
            "18",
            "توپ دوج بال فومی",
            "توپ دوج بال فوم نرم برای بازی ایمن در سالن",
            "تفریحی",
            Money::toman(650_000),
        )
        .with_rating(4.0, 21)
        .with_image(pexels("1752757/pexels-photo-1752757.jpeg")),
        Product::new(
            "19",
            "توپ نت بال رسمی",
            "توپ نت بال رسمی برای مسابقات رقابتی",
            "نت بال",
            Money::toman(1_150_000),
        )
        .with_rating(4.5, 29)
        .with_image(pexels("863988/pexels-photo-863988.jpeg")),
        Product::new(
            "20",
            "مجموعه توپ اسکواش",
            "توپ‌های اسکواش حرفه‌ای - بسته ۳ عددی",
            "اسکواش",
            Money::toman(550_000),
        )
        .with_rating(4.4, 17)
        .with_image(pexels("209977/pexels-photo-209977.jpeg")),
    ]
}

fn stock(ids: &[u32]) -> impl Iterator<Item = ProductId> + '_ {
    ids.iter().copied().map(ProductId::from)
}

/// The vendor table.
pub fn vendors() -> Vec<VendorInventory> {
    vec![
        VendorInventory::new("v-toopsara", "توپ‌سرا", stock(&[1, 2, 3, 4, 5, 9, 12, 16])),
        VendorInventory::new("v-chabok", "چابک اسپرت", stock(&[2, 3, 8, 9, 11, 17, 20])),
        VendorInventory::new("v-pars", "ورزش پارس", stock(&[1, 2, 4, 6, 7, 9, 10, 13, 14])),
        VendorInventory::new("v-arman", "آرمان ورزش", stock(&[2, 9, 12, 15, 16, 18, 19])),
        VendorInventory::new("v-golestan", "گلستان", stock(&[1, 5, 6, 7, 8, 10, 11, 13, 17, 20])),
        VendorInventory::new("v-bazikadeh", "بازی‌کده", stock(&[3, 4, 14, 15, 18, 19])),
    ]
}

/// Load the seeded catalog.
pub fn catalog() -> Result<Catalog, CommerceError> {
    Catalog::new(products())
}

/// Load the seeded vendor table.
pub fn vendor_table() -> Result<VendorTable, CommerceError> {
    VendorTable::new(vendors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_loads() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.products()[0].id, ProductId::new("1"));
        assert_eq!(catalog.products()[19].id, ProductId::new("20"));
    }

    #[test]
    fn test_seed_vendors_reference_catalog() {
        let catalog = catalog().unwrap();
        let table = vendor_table().unwrap();
        assert_eq!(table.len(), 6);
        assert_eq!(table.dangling_references(&catalog).count(), 0);
    }

    #[test]
    fn test_seed_discounted_products() {
        let discounted: Vec<_> = products()
            .into_iter()
            .filter(|p| p.is_discounted)
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(discounted, vec!["1", "5", "12"]);
    }
}
