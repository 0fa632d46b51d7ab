//! Payloads captured from the provider, trimmed down for tests.

/// `hourly` elements per `weather` day in [`WEATHER`] (three-hourly).
pub const HOURS_PER_DAY: usize = 8;

/// Two-day, three-hourly forecast for NE6 with current conditions.
pub const WEATHER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<data>
    <request>
        <type>UK Postcode</type>
        <query>NE6</query>
    </request>
    <nearest_area>
        <areaName><![CDATA[Byker]]></areaName>
        <country><![CDATA[United Kingdom]]></country>
        <region><![CDATA[Tyne and Wear]]></region>
        <latitude>54.974</latitude>
        <longitude>-1.572</longitude>
        <population>0</population>
        <weatherUrl><![CDATA[http://www.worldweatheronline.com/v2/weather.aspx?q=54.974,-1.572]]></weatherUrl>
    </nearest_area>
    <time_zone>
        <localtime>2015-07-25 11:01</localtime>
        <utcOffset>1.0</utcOffset>
    </time_zone>
    <current_condition>
        <observation_time>10:01 AM</observation_time>
        <temp_C>14</temp_C>
        <temp_F>57</temp_F>
        <weatherCode>116</weatherCode>
        <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
        <weatherDesc><![CDATA[Partly Cloudy ]]></weatherDesc>
        <windspeedMiles>9</windspeedMiles>
        <windspeedKmph>15</windspeedKmph>
        <winddirDegree>260</winddirDegree>
        <winddir16Point>W</winddir16Point>
        <precipMM>0.0</precipMM>
        <humidity>63</humidity>
        <visibility>10</visibility>
        <pressure>1012</pressure>
        <cloudcover>50</cloudcover>
        <FeelsLikeC>13</FeelsLikeC>
        <FeelsLikeF>55</FeelsLikeF>
    </current_condition>
        <weather>
            <date>2015-07-25</date>
            <astronomy>
                <sunrise>05:02 AM</sunrise>
                <sunset>09:22 PM</sunset>
                <moonrise>03:26 PM</moonrise>
                <moonset>12:22 AM</moonset>
            </astronomy>
            <maxtempC>18</maxtempC>
            <maxtempF>64</maxtempF>
            <mintempC>9</mintempC>
            <mintempF>48</mintempF>
            <uvIndex>5</uvIndex>
            <totalSnow_cm>0.0</totalSnow_cm>
            <hourly>
                <time>0</time>
                <tempC>11</tempC>
                <tempF>52</tempF>
                <windspeedMiles>6</windspeedMiles>
                <windspeedKmph>10</windspeedKmph>
                <winddirDegree>347</winddirDegree>
                <winddir16Point>NNW</winddir16Point>
                <weatherCode>113</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0008_clear_sky_night.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Clear]]></weatherDesc>
                <precipMM>0.0</precipMM>
                <humidity>84</humidity>
                <visibility>10</visibility>
                <pressure>1011</pressure>
                <cloudcover>21</cloudcover>
                <HeatIndexC>11</HeatIndexC>
                <HeatIndexF>52</HeatIndexF>
                <DewPointC>9</DewPointC>
                <DewPointF>47</DewPointF>
                <WindChillC>10</WindChillC>
                <WindChillF>50</WindChillF>
                <WindGustMiles>11</WindGustMiles>
                <WindGustKmph>17</WindGustKmph>
                <FeelsLikeC>10</FeelsLikeC>
                <FeelsLikeF>50</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>20</chanceofovercast>
                <chanceofsunshine>100</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>0</UTCtime>
            </hourly>
            <hourly>
                <time>300</time>
                <tempC>11</tempC>
                <tempF>52</tempF>
                <windspeedMiles>10</windspeedMiles>
                <windspeedKmph>16</windspeedKmph>
                <winddirDegree>212</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>59</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>44</cloudcover>
                <HeatIndexC>11</HeatIndexC>
                <HeatIndexF>52</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>10</WindChillC>
                <WindChillF>50</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>10</FeelsLikeC>
                <FeelsLikeF>50</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>6</chanceofovercast>
                <chanceofsunshine>63</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>300</UTCtime>
            </hourly>
            <hourly>
                <time>600</time>
                <tempC>18</tempC>
                <tempF>64</tempF>
                <windspeedMiles>4</windspeedMiles>
                <windspeedKmph>6</windspeedKmph>
                <winddirDegree>329</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>68</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>12</cloudcover>
                <HeatIndexC>18</HeatIndexC>
                <HeatIndexF>64</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>17</WindChillC>
                <WindChillF>63</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>17</FeelsLikeC>
                <FeelsLikeF>63</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>5</chanceofovercast>
                <chanceofsunshine>67</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>600</UTCtime>
            </hourly>
            <hourly>
                <time>900</time>
                <tempC>15</tempC>
                <tempF>59</tempF>
                <windspeedMiles>5</windspeedMiles>
                <windspeedKmph>8</windspeedKmph>
                <winddirDegree>261</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>60</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>45</cloudcover>
                <HeatIndexC>15</HeatIndexC>
                <HeatIndexF>59</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>14</WindChillC>
                <WindChillF>57</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>14</FeelsLikeC>
                <FeelsLikeF>57</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>27</chanceofovercast>
                <chanceofsunshine>43</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>900</UTCtime>
            </hourly>
            <hourly>
                <time>1200</time>
                <tempC>18</tempC>
                <tempF>64</tempF>
                <windspeedMiles>5</windspeedMiles>
                <windspeedKmph>8</windspeedKmph>
                <winddirDegree>257</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>58</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>46</cloudcover>
                <HeatIndexC>18</HeatIndexC>
                <HeatIndexF>64</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>17</WindChillC>
                <WindChillF>63</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>17</FeelsLikeC>
                <FeelsLikeF>63</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>37</chanceofovercast>
                <chanceofsunshine>65</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>1200</UTCtime>
            </hourly>
            <hourly>
                <time>1500</time>
                <tempC>9</tempC>
                <tempF>48</tempF>
                <windspeedMiles>7</windspeedMiles>
                <windspeedKmph>11</windspeedKmph>
                <winddirDegree>211</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>90</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>18</cloudcover>
                <HeatIndexC>9</HeatIndexC>
                <HeatIndexF>48</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>8</WindChillC>
                <WindChillF>46</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>8</FeelsLikeC>
                <FeelsLikeF>46</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>18</chanceofovercast>
                <chanceofsunshine>66</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>1500</UTCtime>
            </hourly>
            <hourly>
                <time>1800</time>
                <tempC>11</tempC>
                <tempF>52</tempF>
                <windspeedMiles>12</windspeedMiles>
                <windspeedKmph>19</windspeedKmph>
                <winddirDegree>230</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>74</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>45</cloudcover>
                <HeatIndexC>11</HeatIndexC>
                <HeatIndexF>52</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>10</WindChillC>
                <WindChillF>50</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>10</FeelsLikeC>
                <FeelsLikeF>50</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>52</chanceofovercast>
                <chanceofsunshine>83</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>1800</UTCtime>
            </hourly>
            <hourly>
                <time>2100</time>
                <tempC>11</tempC>
                <tempF>52</tempF>
                <windspeedMiles>5</windspeedMiles>
                <windspeedKmph>8</windspeedKmph>
                <winddirDegree>348</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>67</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>33</cloudcover>
                <HeatIndexC>11</HeatIndexC>
                <HeatIndexF>52</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>10</WindChillC>
                <WindChillF>50</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>10</FeelsLikeC>
                <FeelsLikeF>50</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>6</chanceofovercast>
                <chanceofsunshine>75</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-25</UTCdate>
                <UTCtime>2100</UTCtime>
            </hourly>
        </weather>
        <weather>
            <date>2015-07-26</date>
            <astronomy>
                <sunrise>05:04 AM</sunrise>
                <sunset>09:20 PM</sunset>
                <moonrise>04:31 PM</moonrise>
                <moonset>No moonset</moonset>
            </astronomy>
            <maxtempC>17</maxtempC>
            <maxtempF>63</maxtempF>
            <mintempC>10</mintempC>
            <mintempF>50</mintempF>
            <uvIndex>4</uvIndex>
            <totalSnow_cm>0.0</totalSnow_cm>
            <hourly>
                <time>0</time>
                <tempC>10</tempC>
                <tempF>50</tempF>
                <windspeedMiles>4</windspeedMiles>
                <windspeedKmph>6</windspeedKmph>
                <winddirDegree>358</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>68</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>41</cloudcover>
                <HeatIndexC>10</HeatIndexC>
                <HeatIndexF>50</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>9</WindChillC>
                <WindChillF>48</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>9</FeelsLikeC>
                <FeelsLikeF>48</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>43</chanceofovercast>
                <chanceofsunshine>74</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>0</UTCtime>
            </hourly>
            <hourly>
                <time>300</time>
                <tempC>15</tempC>
                <tempF>59</tempF>
                <windspeedMiles>9</windspeedMiles>
                <windspeedKmph>14</windspeedKmph>
                <winddirDegree>319</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>84</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>33</cloudcover>
                <HeatIndexC>15</HeatIndexC>
                <HeatIndexF>59</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>14</WindChillC>
                <WindChillF>57</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>14</FeelsLikeC>
                <FeelsLikeF>57</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>19</chanceofovercast>
                <chanceofsunshine>55</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>300</UTCtime>
            </hourly>
            <hourly>
                <time>600</time>
                <tempC>11</tempC>
                <tempF>52</tempF>
                <windspeedMiles>7</windspeedMiles>
                <windspeedKmph>11</windspeedKmph>
                <winddirDegree>220</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>74</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>43</cloudcover>
                <HeatIndexC>11</HeatIndexC>
                <HeatIndexF>52</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>10</WindChillC>
                <WindChillF>50</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>10</FeelsLikeC>
                <FeelsLikeF>50</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>31</chanceofovercast>
                <chanceofsunshine>96</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>600</UTCtime>
            </hourly>
            <hourly>
                <time>900</time>
                <tempC>14</tempC>
                <tempF>57</tempF>
                <windspeedMiles>11</windspeedMiles>
                <windspeedKmph>18</windspeedKmph>
                <winddirDegree>273</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>59</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>17</cloudcover>
                <HeatIndexC>14</HeatIndexC>
                <HeatIndexF>57</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>13</WindChillC>
                <WindChillF>55</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>13</FeelsLikeC>
                <FeelsLikeF>55</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>32</chanceofovercast>
                <chanceofsunshine>66</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>900</UTCtime>
            </hourly>
            <hourly>
                <time>1200</time>
                <tempC>11</tempC>
                <tempF>52</tempF>
                <windspeedMiles>9</windspeedMiles>
                <windspeedKmph>14</windspeedKmph>
                <winddirDegree>238</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>86</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>36</cloudcover>
                <HeatIndexC>11</HeatIndexC>
                <HeatIndexF>52</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>10</WindChillC>
                <WindChillF>50</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>10</FeelsLikeC>
                <FeelsLikeF>50</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>2</chanceofovercast>
                <chanceofsunshine>82</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>1200</UTCtime>
            </hourly>
            <hourly>
                <time>1500</time>
                <tempC>10</tempC>
                <tempF>50</tempF>
                <windspeedMiles>12</windspeedMiles>
                <windspeedKmph>19</windspeedKmph>
                <winddirDegree>346</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>75</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>31</cloudcover>
                <HeatIndexC>10</HeatIndexC>
                <HeatIndexF>50</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>9</WindChillC>
                <WindChillF>48</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>9</FeelsLikeC>
                <FeelsLikeF>48</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>44</chanceofovercast>
                <chanceofsunshine>62</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>1500</UTCtime>
            </hourly>
            <hourly>
                <time>1800</time>
                <tempC>18</tempC>
                <tempF>64</tempF>
                <windspeedMiles>11</windspeedMiles>
                <windspeedKmph>18</windspeedKmph>
                <winddirDegree>348</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>84</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>14</cloudcover>
                <HeatIndexC>18</HeatIndexC>
                <HeatIndexF>64</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>17</WindChillC>
                <WindChillF>63</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>17</FeelsLikeC>
                <FeelsLikeF>63</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>53</chanceofovercast>
                <chanceofsunshine>45</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>1800</UTCtime>
            </hourly>
            <hourly>
                <time>2100</time>
                <tempC>13</tempC>
                <tempF>55</tempF>
                <windspeedMiles>11</windspeedMiles>
                <windspeedKmph>18</windspeedKmph>
                <winddirDegree>216</winddirDegree>
                <winddir16Point>W</winddir16Point>
                <weatherCode>116</weatherCode>
                <weatherIconUrl><![CDATA[http://cdn.worldweatheronline.net/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png]]></weatherIconUrl>
                <weatherDesc><![CDATA[Partly Cloudy]]></weatherDesc>
                <precipMM>0.1</precipMM>
                <humidity>58</humidity>
                <visibility>10</visibility>
                <pressure>1012</pressure>
                <cloudcover>56</cloudcover>
                <HeatIndexC>13</HeatIndexC>
                <HeatIndexF>55</HeatIndexF>
                <DewPointC>8</DewPointC>
                <DewPointF>46</DewPointF>
                <WindChillC>12</WindChillC>
                <WindChillF>54</WindChillF>
                <WindGustMiles>12</WindGustMiles>
                <WindGustKmph>19</WindGustKmph>
                <FeelsLikeC>12</FeelsLikeC>
                <FeelsLikeF>54</FeelsLikeF>
                <chanceofrain>0</chanceofrain>
                <chanceofremdry>0</chanceofremdry>
                <chanceofwindy>0</chanceofwindy>
                <chanceofovercast>44</chanceofovercast>
                <chanceofsunshine>59</chanceofsunshine>
                <chanceoffrost>0</chanceoffrost>
                <chanceofhightemp>0</chanceofhightemp>
                <chanceoffog>0</chanceoffog>
                <chanceofsnow>0</chanceofsnow>
                <chanceofthunder>0</chanceofthunder>
                <UTCdate>2015-07-26</UTCdate>
                <UTCtime>2100</UTCtime>
            </hourly>
        </weather>
</data>
"#;

/// A weather report in the provider's error shape: an `error` child under `data`.
pub const API_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<data>
    <error>
        <msg>Unable to find any matching weather location to the query submitted!</msg>
    </error>
</data>
"#;

/// Body sent alongside a non-200 status.
pub const KEY_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<error>
    <type>KeyError</type>
    <message>API key has reached calls per day allowed limit.</message>
</error>
"#;

/// Current conditions in French.
pub const LOCALIZED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<data>
    <request>
        <type>City</type>
        <query>Paris, France</query>
    </request>
    <current_condition>
        <observation_time>01:15 PM</observation_time>
        <temp_C>24</temp_C>
        <weatherCode>113</weatherCode>
        <lang_fr><![CDATA[Ensoleillé]]></lang_fr>
        <weatherDesc><![CDATA[Sunny]]></weatherDesc>
        <humidity>41</humidity>
    </current_condition>
</data>
"#;

pub const SEARCH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<search_api>
    <result>
        <areaName><![CDATA[Byker]]></areaName>
        <country><![CDATA[United Kingdom]]></country>
        <region><![CDATA[Tyne and Wear]]></region>
        <latitude>54.974</latitude>
        <longitude>-1.572</longitude>
        <population>0</population>
        <weatherUrl><![CDATA[http://www.worldweatheronline.com/v2/weather.aspx?q=54.974,-1.572]]></weatherUrl>
        <timezone>
            <offset>1.0</offset>
        </timezone>
    </result>
    <result>
        <areaName><![CDATA[Byker]]></areaName>
        <country><![CDATA[Canada]]></country>
        <region><![CDATA[Newfoundland]]></region>
        <latitude>47.533</latitude>
        <longitude>-52.717</longitude>
        <population>0</population>
        <timezone>
            <offset>-2.5</offset>
        </timezone>
    </result>
</search_api>
"#;
